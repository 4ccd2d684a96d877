//! Error types shared by the sequence and reacher modules.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The upper bound of an instance must be positive.
    #[error("upper bound must be positive")]
    InvalidBound,

    /// The tables for the bound would not fit in memory addressable by this platform.
    #[error("upper bound {bound} is too large, at most {max} is supported")]
    BoundTooLarge { bound: u64, max: u64 },

    /// The queried integer lies above the bound of the instance, so its prime
    /// factors are not guaranteed to be covered by the prime table.
    #[error("{value} is out of range [0, {bound}]")]
    OutOfRange { value: u64, bound: u64 },

    /// A prime source returned a list that is not strictly ascending or exceeds the bound.
    #[error("prime table is invalid: {0}")]
    InvalidPrimeTable(String),

    /// A path string contains a character other than `0` or `1`.
    #[error("invalid move `{0}` in path")]
    InvalidMove(char),
}

impl Error {
    pub(crate) fn out_of_range(value: u64, bound: u64) -> Self {
        Self::OutOfRange { value, bound }
    }

    pub(crate) fn bound_too_large(bound: u64, max: u64) -> Self {
        Self::BoundTooLarge { bound, max }
    }
}
