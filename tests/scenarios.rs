//! End-to-end chunking scenarios.
//!
//! Concrete inputs with known outputs, from the degenerate (empty, whitespace,
//! one run-on sentence) to legal text full of citations and quotations.

use std::sync::Arc;

use lexslab::{
    split_into_chunks, BoundaryRule, Chunker, ChunkerConfig, EstimatorKind, GreedyChunker,
    SentenceSplitter, SizeEstimator, TargetSize,
};

const LEGAL_SENTENCE: &str = "This is a sentence in a legal document.";

// =============================================================================
// Degenerate input
// =============================================================================

#[test]
fn empty_input_gives_no_chunks() {
    assert!(split_into_chunks("", 1000).is_empty());
}

#[test]
fn whitespace_input_gives_no_chunks() {
    assert!(split_into_chunks("   \n\t  ", 1000).is_empty());
}

#[test]
fn short_document_is_one_chunk() {
    let text = "This is a short document. It has only a few sentences.";
    let chunks = split_into_chunks(text, 1000);

    assert_eq!(chunks, [text]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let chunks = split_into_chunks("\n\n   Recitals.   \t\n", 1000);
    assert_eq!(chunks, ["Recitals."]);
}

#[test]
fn run_on_sentence_is_one_oversized_chunk() {
    let text = format!("{} end.", "the party of the first part and ".repeat(120).trim_end());
    let chunks = split_into_chunks(&text, 40);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], text);
}

#[test]
fn no_punctuation_at_all_is_one_chunk() {
    let text = "whereas ".repeat(500);
    let chunks = split_into_chunks(&text, 10);

    assert_eq!(chunks, [text.trim()]);
}

// =============================================================================
// Packing
// =============================================================================

#[test]
fn repeated_legal_sentences_split_on_periods() {
    let text = [LEGAL_SENTENCE; 50].join(" ");
    let chunks = split_into_chunks(&text, 100);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(!chunk.is_empty());
        assert!(chunk.ends_with('.'), "chunk does not end a sentence: {chunk:?}");
        assert!(chunk.chars().count() <= 100 + 1);
    }
    // 39 + 39 fits in 100, a third does not
    assert_eq!(chunks.len(), 25);
    assert_eq!(chunks[0], format!("{LEGAL_SENTENCE} {LEGAL_SENTENCE}"));
}

#[test]
fn every_chunk_ends_with_a_period() {
    let text = "First sentence. Second sentence. Third sentence. Fourth sentence.";
    let chunks = split_into_chunks(text, 50);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.trim().ends_with('.'), "{chunk:?}");
    }
}

#[test]
fn oversized_sentence_between_small_ones() {
    let big = format!("{}.", "indemnify and hold harmless".repeat(5));
    let text = format!("Small one. {big} Small two. Small three.");
    let chunks = split_into_chunks(&text, 30);

    assert_eq!(chunks, ["Small one.", big.as_str(), "Small two. Small three."]);
}

#[test]
fn internal_newlines_survive() {
    let text = "1. Definitions.\nTerms have meanings.\n\n2. Term.\nOne year.";
    let chunks = split_into_chunks(text, 1000);

    assert_eq!(chunks, [text]);
}

#[test]
fn slabs_carry_positions_and_indices() {
    let text = "  Alpha clause applies. Beta clause applies. Gamma clause applies.  ";
    let slabs = GreedyChunker::new(45).chunk(text);

    assert_eq!(slabs.len(), 2);
    assert_eq!(slabs[0].index, 0);
    assert_eq!(slabs[1].index, 1);
    assert_eq!(slabs[0].start, 2);
    assert_eq!(&text[slabs[1].span()], "Gamma clause applies.");
    assert_eq!(slabs[0].size, 41);
}

// =============================================================================
// Naive sentence boundaries
// =============================================================================

#[test]
fn citations_split_on_every_period() {
    // One unit per sentence: each naive sentence becomes its own chunk.
    let text = "See Brown v. Board, 347 U.S. 483. Also 42 U.S.C. § 1983.";
    let chunker = GreedyChunker::new(0);

    assert_eq!(
        chunker.chunk_texts(text),
        ["See Brown v.", "Board, 347 U.S.", "483.", "Also 42 U.S.C.", "§ 1983."]
    );
}

#[test]
fn quoted_and_bracketed_endings() {
    let text = "The court said \"Affirmed.\" (See note 4.) Costs to appellee!";
    let chunker = GreedyChunker::new(0);

    assert_eq!(
        chunker.chunk_texts(text),
        ["The court said \"Affirmed.\"", "(See note 4.)", "Costs to appellee!"]
    );
}

#[test]
fn decimals_stay_whole_by_default() {
    let chunker = GreedyChunker::new(0);
    assert_eq!(
        chunker.chunk_texts("Interest accrues at 1.5 percent. Payable monthly."),
        ["Interest accrues at 1.5 percent.", "Payable monthly."]
    );

    let splitter = SentenceSplitter::builder()
        .rule(BoundaryRule::AnyTerminator)
        .build()
        .unwrap();
    let chunker = GreedyChunker::new(0).with_splitter(splitter);
    assert_eq!(
        chunker.chunk_texts("Interest accrues at 1.5 percent."),
        ["Interest accrues at 1.", "5 percent."]
    );
}

// =============================================================================
// Targets and estimators
// =============================================================================

#[test]
fn bad_targets_clamp_instead_of_failing() {
    let text = "One. Two. Three.";

    for target in [TargetSize::from(-10_i64), TargetSize::from_f64(f64::NAN)] {
        assert_eq!(
            GreedyChunker::new(target).chunk_texts(text),
            ["One.", "Two.", "Three."]
        );
    }
    assert_eq!(GreedyChunker::new(f64::INFINITY).chunk_texts(text), [text]);
}

#[test]
fn token_budget_packs_more_per_chunk() {
    let text = [LEGAL_SENTENCE; 50].join(" ");

    let by_chars = GreedyChunker::new(100).chunk(&text);
    let by_tokens = GreedyChunker::for_tokens(100).chunk(&text);

    // 10 tokens per sentence, 10 sentences per chunk
    assert_eq!(by_tokens.len(), 5);
    assert!(by_tokens.len() < by_chars.len());
}

#[test]
fn custom_estimator_is_used() {
    struct SentenceCount;

    impl SizeEstimator for SentenceCount {
        fn estimate(&self, _text: &str) -> usize {
            1
        }
    }

    let text = "A. B. C. D. E.";
    let chunker = GreedyChunker::new(2).with_estimator(SentenceCount);
    assert_eq!(chunker.chunk_texts(text), ["A. B.", "C. D.", "E."]);
}

#[test]
fn shared_estimator_across_chunkers() {
    let estimator: Arc<dyn SizeEstimator> = Arc::new(|s: &str| s.split_whitespace().count());
    let small = GreedyChunker::new(3).with_shared_estimator(Arc::clone(&estimator));
    let large = GreedyChunker::new(100).with_shared_estimator(estimator);

    let text = "Tenant pays rent. Landlord fixes roof. Both sign.";
    assert_eq!(small.chunk(text).len(), 3);
    assert_eq!(large.chunk(text).len(), 1);
}

#[test]
fn config_with_headings() {
    let chunker = ChunkerConfig {
        target_size: 8,
        estimator: EstimatorKind::Words,
        blank_line_breaks: true,
        ..ChunkerConfig::default()
    }
    .build()
    .unwrap();

    let text = "ARTICLE I\n\nThe lease term is one year from the start date.\n\nARTICLE II\n\nRent is due.";
    assert_eq!(
        chunker.chunk_texts(text),
        [
            "ARTICLE I",
            "The lease term is one year from the start date.",
            "ARTICLE II\n\nRent is due."
        ]
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn chunker_is_shareable_across_threads() {
    let chunker: Arc<dyn Chunker> = Arc::new(GreedyChunker::new(100));
    let text = [LEGAL_SENTENCE; 40].join(" ");
    let expected = chunker.chunk(&text);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| chunker.chunk(&text)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
