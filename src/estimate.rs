//! Size estimation.
//!
//! The packer never looks at text length directly. It asks a
//! [`SizeEstimator`] how big each sentence is, and compares the running
//! total against the [`TargetSize`](crate::TargetSize). Swapping in an exact
//! tokenizer only means swapping the estimator.
//!
//! ## Built-in estimators
//!
//! | Estimator | Unit | Notes |
//! |-----------|------|-------|
//! | [`CharEstimator::characters`] | 1 char | what [`split_into_chunks`](crate::split_into_chunks) uses |
//! | [`CharEstimator::tokens`] | ~4 chars | rough token proxy for English |
//! | [`WordEstimator`] | 1 word | UAX #29 word boundaries |
//!
//! Characters are Unicode scalar values, not bytes: `"§ 1983"` is six
//! characters and eight bytes.
//!
//! ## Plugging in a tokenizer
//!
//! Any `Fn(&str) -> usize` closure is an estimator:
//!
//! ```rust
//! use lexslab::{Chunker, GreedyChunker};
//!
//! // stand-in for a real tokenizer call
//! let count_tokens = |s: &str| s.split_whitespace().count() * 4 / 3;
//!
//! let chunker = GreedyChunker::new(16).with_estimator(count_tokens);
//! let slabs = chunker.chunk("The lessee shall pay rent. The lessor shall repair.");
//! assert!(!slabs.is_empty());
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, Result};

/// Characters per unit used by [`split_into_chunks`](crate::split_into_chunks).
pub const DEFAULT_CHARS_PER_UNIT: usize = 1;

/// Rough number of characters per model token for English prose.
pub const CHARS_PER_TOKEN: usize = 4;

/// Rough number of bytes per word in English prose, counting the space after it.
pub const BYTES_PER_WORD: usize = 5;

/// Estimates how much of a size budget a piece of text consumes.
///
/// Implementations must be pure: the same text always gets the same
/// estimate. The packer relies on that to keep chunk boundaries stable.
pub trait SizeEstimator: Send + Sync {
    /// Estimated size of `text` in the estimator's unit.
    fn estimate(&self, text: &str) -> usize;

    /// Approximate bytes of source text per unit.
    ///
    /// Only used to predict chunk counts up front, never for packing. The
    /// default assumes a tokenizer and returns [`CHARS_PER_TOKEN`].
    fn bytes_per_unit(&self) -> usize {
        CHARS_PER_TOKEN
    }
}

impl<F> SizeEstimator for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn estimate(&self, text: &str) -> usize {
        self(text)
    }
}

/// Character-count estimator: `ceil(chars / chars_per_unit)`.
///
/// ```rust
/// use lexslab::{CharEstimator, SizeEstimator};
///
/// let tokens = CharEstimator::tokens();
/// assert_eq!(tokens.estimate("abcd"), 1);
/// assert_eq!(tokens.estimate("abcde"), 2);
/// assert_eq!(tokens.estimate(""), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharEstimator {
    chars_per_unit: usize,
}

impl CharEstimator {
    /// Create an estimator counting `chars_per_unit` characters as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharsPerUnit`] if `chars_per_unit == 0`.
    pub fn new(chars_per_unit: usize) -> Result<Self> {
        if chars_per_unit == 0 {
            return Err(Error::InvalidCharsPerUnit(chars_per_unit));
        }
        Ok(Self { chars_per_unit })
    }

    /// One unit per character.
    #[must_use]
    pub const fn characters() -> Self {
        Self {
            chars_per_unit: DEFAULT_CHARS_PER_UNIT,
        }
    }

    /// One unit per [`CHARS_PER_TOKEN`] characters.
    #[must_use]
    pub const fn tokens() -> Self {
        Self {
            chars_per_unit: CHARS_PER_TOKEN,
        }
    }

    /// Characters counted as one unit.
    #[must_use]
    pub const fn chars_per_unit(&self) -> usize {
        self.chars_per_unit
    }
}

impl Default for CharEstimator {
    fn default() -> Self {
        Self::characters()
    }
}

impl SizeEstimator for CharEstimator {
    fn estimate(&self, text: &str) -> usize {
        text.chars().count().div_ceil(self.chars_per_unit)
    }

    // exact for ASCII
    fn bytes_per_unit(&self) -> usize {
        self.chars_per_unit
    }
}

/// Word-count estimator using Unicode word boundaries.
///
/// Punctuation and whitespace are free, so `"!!!"` has size zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordEstimator;

impl SizeEstimator for WordEstimator {
    fn estimate(&self, text: &str) -> usize {
        text.unicode_words().count()
    }

    fn bytes_per_unit(&self) -> usize {
        BYTES_PER_WORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters_counts_scalars_not_bytes() {
        let est = CharEstimator::characters();
        assert_eq!(est.estimate("§ 1983"), 6);
        assert_eq!(est.estimate("日本語"), 3);
    }

    #[test]
    fn test_tokens_rounds_up() {
        let est = CharEstimator::tokens();
        assert_eq!(est.estimate("a"), 1);
        assert_eq!(est.estimate("abcdefgh"), 2);
        assert_eq!(est.estimate("abcdefghi"), 3);
    }

    #[test]
    fn test_zero_chars_per_unit_rejected() {
        assert_eq!(CharEstimator::new(0), Err(Error::InvalidCharsPerUnit(0)));
        assert_eq!(CharEstimator::new(3).map(|e| e.chars_per_unit()), Ok(3));
    }

    #[test]
    fn test_word_estimator() {
        let est = WordEstimator;
        assert_eq!(est.estimate("The parties agree."), 3);
        assert_eq!(est.estimate("!!! ..."), 0);
    }

    #[test]
    fn test_closure_is_estimator() {
        let est = |s: &str| s.len() * 2;
        assert_eq!(SizeEstimator::estimate(&est, "abc"), 6);
        assert_eq!(est.bytes_per_unit(), CHARS_PER_TOKEN);
    }

    #[test]
    fn test_bytes_per_unit() {
        assert_eq!(CharEstimator::characters().bytes_per_unit(), 1);
        assert_eq!(CharEstimator::tokens().bytes_per_unit(), CHARS_PER_TOKEN);
        assert_eq!(WordEstimator.bytes_per_unit(), BYTES_PER_WORD);
    }
}
