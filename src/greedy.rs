//! Greedy sentence packing.
//!
//! One left-to-right pass over the sentences, accumulating until the next
//! one would not fit:
//!
//! ```text
//! target = 50
//!
//! sentence   size   running   action
//! --------   ----   -------   ------
//! S1         15     15        append
//! S2         16     31        append
//! S3         15     46        append
//! S4         16     62 > 50   emit [S1 S2 S3], start [S4]
//! (end)                       emit [S4]
//! ```
//!
//! ## Oversized Sentences
//!
//! A sentence whose estimate alone exceeds the target is never cut. It
//! becomes a chunk of its own, larger than the target, and packing carries
//! on with the next sentence:
//!
//! ```text
//! target = 20
//!
//! S1 (8)   S2 (45)   S3 (6)
//! [S1]     [S2]      [S3]
//!          ^ oversized, emitted alone
//! ```
//!
//! This is what guarantees termination on a document that is one enormous
//! run-on sentence: the worst case is one chunk per sentence.
//!
//! ## Why Not Bin-Packing?
//!
//! Chunks are cited and reassembled in document order. An optimal packer
//! could regroup non-adjacent sentences, so the pass stays greedy and
//! strictly ordered.
//!
//! ## Complexity
//!
//! Segmentation is linear in the text and every sentence is estimated
//! exactly once, so a chunk's size is a running sum and never re-measured.

use std::sync::Arc;

use crate::estimate::{CharEstimator, SizeEstimator};
use crate::sentence::{Sentence, SentenceSplitter};
use crate::{Chunker, Slab, TargetSize};

/// Sentence-aligned greedy chunker.
///
/// ## Example
///
/// ```rust
/// use lexslab::{Chunker, GreedyChunker};
///
/// let chunker = GreedyChunker::new(50);
/// let text = "First sentence. Second sentence. Third sentence. Fourth sentence.";
/// let slabs = chunker.chunk(text);
///
/// assert_eq!(slabs.len(), 2);
/// assert_eq!(slabs[0].text, "First sentence. Second sentence. Third sentence.");
/// assert_eq!(slabs[1].text, "Fourth sentence.");
/// ```
#[derive(Clone)]
pub struct GreedyChunker {
    target: TargetSize,
    splitter: SentenceSplitter,
    estimator: Arc<dyn SizeEstimator>,
}

impl GreedyChunker {
    /// Create a chunker measuring in characters.
    ///
    /// Any value convertible to [`TargetSize`] works; negative or non-finite
    /// targets clamp to zero, which puts every sentence in its own chunk.
    #[must_use]
    pub fn new(target: impl Into<TargetSize>) -> Self {
        Self {
            target: target.into(),
            splitter: SentenceSplitter::default(),
            estimator: Arc::new(CharEstimator::characters()),
        }
    }

    /// Create a chunker measuring in approximate tokens (four characters each).
    #[must_use]
    pub fn for_tokens(target_tokens: impl Into<TargetSize>) -> Self {
        Self::new(target_tokens).with_estimator(CharEstimator::tokens())
    }

    /// Replace the size estimator.
    #[must_use]
    pub fn with_estimator(self, estimator: impl SizeEstimator + 'static) -> Self {
        self.with_shared_estimator(Arc::new(estimator))
    }

    /// Replace the size estimator with one that is already shared.
    #[must_use]
    pub fn with_shared_estimator(mut self, estimator: Arc<dyn SizeEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// Replace the sentence splitter.
    #[must_use]
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// The target size.
    #[must_use]
    pub const fn target(&self) -> TargetSize {
        self.target
    }

    /// The sentence splitter.
    #[must_use]
    pub const fn splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    /// Size of `text` as the packer sees it: the sum of its sentences'
    /// estimates. Whitespace between sentences costs nothing.
    ///
    /// Text whose size is within the target always comes back as one chunk.
    #[must_use]
    pub fn estimate_size(&self, text: &str) -> usize {
        self.splitter
            .split(text)
            .map(|s| self.estimator.estimate(s.text))
            .fold(0, usize::saturating_add)
    }

    /// Chunk `text` and keep only the chunk strings.
    #[must_use]
    pub fn chunk_texts(&self, text: &str) -> Vec<String> {
        self.chunk(text).into_iter().map(Slab::into_text).collect()
    }
}

impl std::fmt::Debug for GreedyChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreedyChunker")
            .field("target", &self.target)
            .field("splitter", &self.splitter)
            .finish_non_exhaustive()
    }
}

/// The run of sentences currently being accumulated.
#[derive(Debug, Default)]
struct Pending {
    span: Option<(usize, usize)>,
    size: usize,
    sentences: usize,
}

impl Pending {
    fn push(&mut self, sentence: &Sentence<'_>, size: usize) {
        let start = self.span.map_or(sentence.start, |(start, _)| start);
        self.span = Some((start, sentence.end));
        self.size = self.size.saturating_add(size);
        self.sentences += 1;
    }

    fn emit(&mut self, text: &str, slabs: &mut Vec<Slab>) {
        let Some((start, end)) = self.span.take() else {
            return;
        };
        let index = slabs.len();
        tracing::trace!(
            index,
            start,
            end,
            size = self.size,
            sentences = self.sentences,
            "emitting chunk"
        );
        slabs.push(Slab::new(&text[start..end], start, end, index, self.size));
        self.size = 0;
        self.sentences = 0;
    }
}

impl Chunker for GreedyChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        let mut slabs = Vec::new();
        let mut pending = Pending::default();
        let mut sentences = 0usize;

        for sentence in self.splitter.split(text) {
            let size = self.estimator.estimate(sentence.text);

            if self.target.would_overflow(pending.size, size) {
                if pending.span.is_some() {
                    pending.emit(text, &mut slabs);
                }
                if self.target.would_overflow(0, size) {
                    tracing::debug!(
                        sentence = sentences,
                        size,
                        target_size = %self.target,
                        "sentence exceeds target size; emitting as its own chunk"
                    );
                    pending.push(&sentence, size);
                    pending.emit(text, &mut slabs);
                    sentences += 1;
                    continue;
                }
            }

            pending.push(&sentence, size);
            sentences += 1;
        }
        pending.emit(text, &mut slabs);

        tracing::debug!(
            sentences,
            chunks = slabs.len(),
            target_size = %self.target,
            bytes = text.len(),
            "chunked text"
        );
        slabs
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        if text_len == 0 {
            return 0;
        }
        let bytes_per_chunk = self
            .target
            .get()
            .max(1)
            .saturating_mul(self.estimator.bytes_per_unit().max(1));
        text_len.div_ceil(bytes_per_chunk)
    }
}
