//! # lexslab
//!
//! Sentence-aligned chunking of long documents for retrieval-augmented
//! generation (RAG) ingestion.
//!
//! ## The Problem
//!
//! An extracted contract, lease, or court filing can be hundreds of kilobytes
//! of loosely structured text. The embedding step has a hard input limit, so
//! the text has to be cut into bounded pieces first. Cutting mid-sentence
//! produces fragments that embed badly and read worse when cited back to a
//! user, so every cut falls between sentences.
//!
//! ```text
//! Document:  "First sentence. Second sentence. Third sentence. Fourth sentence."
//! Target:    50 characters
//!
//! Chunk 0:   "First sentence. Second sentence. Third sentence."   (46)
//! Chunk 1:   "Fourth sentence."                                   (16)
//! ```
//!
//! ## The Contract
//!
//! [`split_into_chunks`] never fails, never panics and always terminates:
//!
//! - Empty or whitespace-only input gives no chunks.
//! - No chunk is empty, and every chunk is trimmed.
//! - Chunks come out in document order; no sentence is lost or repeated.
//! - Input whose estimated size fits the target comes back as one chunk.
//! - A single sentence larger than the target becomes its own chunk, uncut.
//!
//! ## Pieces
//!
//! | Piece | Role |
//! |-------|------|
//! | [`SentenceSplitter`] | finds sentence boundaries (naive: no abbreviation handling) |
//! | [`SizeEstimator`] | measures a sentence; swap in a real tokenizer here |
//! | [`TargetSize`] | clamped target; bad values degrade instead of failing |
//! | [`GreedyChunker`] | the single-pass packer |
//! | [`ChunkerConfig`] | declarative settings, serde-loadable with the `serde` feature |
//!
//! ## Quick Start
//!
//! ```rust
//! use lexslab::{split_into_chunks, Chunker, GreedyChunker, WordEstimator};
//!
//! let text = "The lessee shall pay rent monthly. \
//!             The lessor shall maintain the premises. \
//!             Either party may terminate on notice.";
//!
//! // Character budget, the reference behaviour
//! let chunks = split_into_chunks(text, 80);
//! assert_eq!(chunks.len(), 2);
//!
//! // Approximate token budget, with positions for citation
//! let slabs = GreedyChunker::for_tokens(20).chunk(text);
//! assert!(slabs.iter().all(|s| &text[s.span()] == s.text));
//!
//! // Word budget
//! let slabs = GreedyChunker::new(6).with_estimator(WordEstimator).chunk(text);
//! assert_eq!(slabs.len(), 3);
//! ```
//!
//! ## Logging
//!
//! Chunking emits `tracing` events at `debug` (one summary per call, one per
//! oversized sentence) and `trace` (one per chunk). Install a subscriber in
//! the host to see them.

mod budget;
mod config;
mod error;
mod estimate;
mod greedy;
mod sentence;
mod slab;

pub use budget::TargetSize;
pub use config::{ChunkerConfig, EstimatorKind};
pub use error::{Error, Result};
pub use estimate::{
    CharEstimator, SizeEstimator, WordEstimator, BYTES_PER_WORD, CHARS_PER_TOKEN,
    DEFAULT_CHARS_PER_UNIT,
};
pub use greedy::GreedyChunker;
pub use sentence::{
    BoundaryRule, Sentence, SentenceSplitter, SentenceSplitterBuilder, Sentences,
    DEFAULT_CLOSERS, DEFAULT_TERMINATORS,
};
pub use slab::Slab;

/// A text chunking strategy.
///
/// Ingestion code holds a `&dyn Chunker` (or `Arc<dyn Chunker>`) so the
/// packing policy can change without touching the pipeline:
///
/// ```rust
/// use lexslab::{Chunker, GreedyChunker};
///
/// fn ingest(chunker: &dyn Chunker, text: &str) -> Vec<(usize, String)> {
///     chunker
///         .chunk(text)
///         .into_iter()
///         .map(|slab| (slab.index, slab.text))
///         .collect()
/// }
///
/// let rows = ingest(&GreedyChunker::new(20), "Hello world. This is a test.");
/// assert_eq!(rows[0], (0, String::from("Hello world.")));
/// assert_eq!(rows[1], (1, String::from("This is a test.")));
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Slab`] containing the text and its byte offsets
    /// in the original document.
    fn chunk(&self, text: &str) -> Vec<Slab>;

    /// Estimate the number of chunks for a text of `text_len` bytes.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize;
}

/// Split `text` into ordered, sentence-aligned chunks of at most
/// `target_size` characters each (best effort).
///
/// Sentences are packed greedily; a sentence longer than `target_size` is
/// returned as a chunk of its own. Sizes count characters of sentence text;
/// whitespace between sentences is free.
///
/// ```rust
/// use lexslab::split_into_chunks;
///
/// assert!(split_into_chunks("", 1000).is_empty());
/// assert!(split_into_chunks("   \n\t  ", 1000).is_empty());
///
/// let text = "This is a short document. It has only a few sentences.";
/// assert_eq!(split_into_chunks(text, 1000), [text]);
/// ```
#[must_use]
pub fn split_into_chunks(text: &str, target_size: usize) -> Vec<String> {
    GreedyChunker::new(target_size).chunk_texts(text)
}
