//! Error types for lexslab.
//!
//! Chunking never fails. These errors only come out of building a
//! configuration: a splitter with no terminators, an estimator that would
//! divide by zero, and so on.

/// Errors that can occur while configuring a chunker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sentence splitter was given an empty terminator set.
    #[error("sentence splitter needs at least one terminator")]
    NoTerminators,

    /// A whitespace character was listed as a terminator or closer.
    #[error("whitespace {0:?} cannot be used as sentence punctuation")]
    WhitespacePunctuation(char),

    /// The same character was listed both as a terminator and as a closer.
    #[error("{0:?} is listed both as a terminator and as a closer")]
    PunctuationConflict(char),

    /// Characters per size unit must be > 0.
    #[error("invalid characters per unit: {0} (must be > 0)")]
    InvalidCharsPerUnit(usize),
}

/// Result type for lexslab operations.
pub type Result<T> = std::result::Result<T, Error>;
