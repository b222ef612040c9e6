//! Target size for a chunk.
//!
//! Callers hand in a "token count" that comes from wherever: a config file,
//! a float computed from a model's context window, a user-supplied query
//! parameter. The chunker must not fail on any of it, so every conversion
//! into [`TargetSize`] clamps instead of erroring:
//!
//! ```text
//! input        target
//! -----        ------
//! 512          512
//! 0            0            (one sentence per chunk)
//! -3           0
//! NaN          0
//! 12.9         12
//! +inf         usize::MAX   (never split)
//! ```
//!
//! A target of zero does not stall the packer. Every sentence with a
//! non-zero estimate is oversized and is emitted alone, which is the
//! "at least one sentence per chunk" floor.

/// Approximate upper bound on a chunk's estimated size.
///
/// # Examples
///
/// ```rust
/// use lexslab::TargetSize;
///
/// assert_eq!(TargetSize::new(100).get(), 100);
/// assert_eq!(TargetSize::from(-5_i64).get(), 0);
/// assert_eq!(TargetSize::from_f64(f64::NAN).get(), 0);
/// assert_eq!(TargetSize::from_f64(f64::INFINITY).get(), usize::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetSize(usize);

impl TargetSize {
    /// Create a target of `units` estimated size units.
    #[must_use]
    pub const fn new(units: usize) -> Self {
        Self(units)
    }

    /// Create a target from a float, clamping anything that is not a
    /// finite non-negative number.
    #[must_use]
    pub fn from_f64(units: f64) -> Self {
        if units.is_nan() || units <= 0.0 {
            Self(0)
        } else if units >= usize::MAX as f64 {
            Self(usize::MAX)
        } else {
            Self(units.floor() as usize)
        }
    }

    /// The target in size units.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether appending `additional` units to a chunk already holding
    /// `current` units would go past the target.
    #[must_use]
    pub const fn would_overflow(self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.0
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        // ~512 tokens at four characters per token, in character units
        Self::new(2048)
    }
}

impl From<usize> for TargetSize {
    fn from(units: usize) -> Self {
        Self::new(units)
    }
}

impl From<u32> for TargetSize {
    fn from(units: u32) -> Self {
        Self::new(units as usize)
    }
}

impl From<i64> for TargetSize {
    fn from(units: i64) -> Self {
        Self::new(usize::try_from(units).unwrap_or(0))
    }
}

impl From<i32> for TargetSize {
    fn from(units: i32) -> Self {
        Self::from(i64::from(units))
    }
}

impl From<f64> for TargetSize {
    fn from(units: f64) -> Self {
        Self::from_f64(units)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
