//! Error types for the numeric solvers.
//!
//! Producers and drivers are total and never fail; only the Euler solvers reject input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Number outside the range the speller has words for
    #[error("cannot spell {0}: only 1..=1000 is supported")]
    Unspellable(u32),

    /// Collatz chains start at a positive integer
    #[error("collatz chains start at 1 or above, got {0}")]
    NonPositiveStart(u64),

    /// A Collatz term no longer fits in a u64
    #[error("collatz chain from {start} overflows u64 after reaching {term}")]
    CollatzOverflow { start: u64, term: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspellable_display() {
        assert_eq!(
            Error::Unspellable(1001).to_string(),
            "cannot spell 1001: only 1..=1000 is supported"
        );
    }

    #[test]
    fn test_collatz_overflow_display() {
        let err = Error::CollatzOverflow { start: 7, term: u64::MAX };
        assert!(err.to_string().starts_with("collatz chain from 7 overflows"));
    }
}
