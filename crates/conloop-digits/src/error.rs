//! Error types for conloop-digits.

use thiserror::Error;

/// Result type for conloop-digits operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when searching digit permutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is zero or negative.
    #[error("invalid argument: {0} is not a positive integer")]
    InvalidArgument(i128),

    /// The nearest larger permutation does not fit in a `u64`.
    #[error("nearest larger permutation of {number} exceeds u64::MAX")]
    Overflow { number: u64 },
}
