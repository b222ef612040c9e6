//! Declarative chunker configuration.
//!
//! [`GreedyChunker`]'s builder methods are enough in code. `ChunkerConfig`
//! exists for hosts that keep chunking settings next to the rest of their
//! configuration. With the `serde` feature it deserializes from any serde
//! format, and every field has a default:
//!
//! ```toml
//! target_size = 800
//! estimator = "tokens"
//! blank_line_breaks = true
//! ```
//!
//! [`ChunkerConfig::default`] reproduces
//! [`split_into_chunks`](crate::split_into_chunks) exactly.

use crate::estimate::{CharEstimator, WordEstimator, DEFAULT_CHARS_PER_UNIT};
use crate::sentence::{BoundaryRule, SentenceSplitter, DEFAULT_CLOSERS, DEFAULT_TERMINATORS};
use crate::{GreedyChunker, Result, TargetSize};

/// Which built-in estimator to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EstimatorKind {
    /// [`CharEstimator`] with [`ChunkerConfig::chars_per_unit`].
    #[default]
    Chars,
    /// [`CharEstimator`] with [`CHARS_PER_TOKEN`](crate::CHARS_PER_TOKEN), ignoring
    /// `chars_per_unit`.
    Tokens,
    /// [`WordEstimator`].
    Words,
}

/// Settings for building a [`GreedyChunker`].
///
/// ```rust
/// use lexslab::{Chunker, ChunkerConfig, EstimatorKind};
///
/// let config = ChunkerConfig {
///     target_size: 10,
///     estimator: EstimatorKind::Words,
///     ..ChunkerConfig::default()
/// };
/// let chunker = config.build().unwrap();
///
/// let slabs = chunker.chunk("One two three four five six. Seven eight nine ten eleven.");
/// assert_eq!(slabs.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkerConfig {
    /// Target size per chunk, in the estimator's unit.
    pub target_size: usize,
    /// Size estimator.
    pub estimator: EstimatorKind,
    /// Characters per unit for [`EstimatorKind::Chars`].
    pub chars_per_unit: usize,
    /// Sentence terminators.
    pub terminators: String,
    /// Closing punctuation that may follow a terminator.
    pub closers: String,
    /// What must follow a terminator for it to end a sentence.
    pub boundary: BoundaryRule,
    /// Whether a blank line ends a sentence.
    pub blank_line_breaks: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            target_size: TargetSize::default().get(),
            estimator: EstimatorKind::default(),
            chars_per_unit: DEFAULT_CHARS_PER_UNIT,
            terminators: DEFAULT_TERMINATORS.iter().collect(),
            closers: DEFAULT_CLOSERS.iter().collect(),
            boundary: BoundaryRule::default(),
            blank_line_breaks: false,
        }
    }
}

impl ChunkerConfig {
    /// Validate the settings and build a chunker.
    ///
    /// # Errors
    ///
    /// Returns an error if the punctuation sets are invalid (see
    /// [`SentenceSplitterBuilder::build`](crate::SentenceSplitterBuilder::build))
    /// or `chars_per_unit` is zero with [`EstimatorKind::Chars`].
    pub fn build(&self) -> Result<GreedyChunker> {
        let splitter = SentenceSplitter::builder()
            .terminators(&self.terminators)
            .closers(&self.closers)
            .rule(self.boundary)
            .blank_line_breaks(self.blank_line_breaks)
            .build()?;

        let chunker = GreedyChunker::new(self.target_size).with_splitter(splitter);
        let chunker = match self.estimator {
            EstimatorKind::Chars => {
                chunker.with_estimator(CharEstimator::new(self.chars_per_unit)?)
            }
            EstimatorKind::Tokens => chunker.with_estimator(CharEstimator::tokens()),
            EstimatorKind::Words => chunker.with_estimator(WordEstimator),
        };

        tracing::debug!(
            target_size = self.target_size,
            estimator = ?self.estimator,
            boundary = ?self.boundary,
            "built chunker from config"
        );
        Ok(chunker)
    }
}
