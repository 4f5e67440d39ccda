//! Longest Collatz chain below a limit.
//!
//! The chain from `n` halves even terms and maps odd terms to `3n + 1` until it reaches 1.
//! Lengths are computed by plain recursion without a cache.

use log::debug;

use crate::error::{Error, Result};

/// Number of terms in the Collatz chain from `n` down to and including 1.
///
/// ```rust
/// use stepseq::euler::chain_length;
///
/// assert_eq!(chain_length(1), Ok(1));
/// // 6, 3, 10, 5, 16, 8, 4, 2, 1
/// assert_eq!(chain_length(6), Ok(9));
/// ```
pub fn chain_length(n: u64) -> Result<u64> {
    if n == 0 {
        return Err(Error::NonPositiveStart(n));
    }
    chain_from(n, n)
}

fn chain_from(start: u64, n: u64) -> Result<u64> {
    if n == 1 {
        return Ok(1);
    }

    let next = if n % 2 == 0 {
        n / 2
    } else {
        n.checked_mul(3)
            .and_then(|tripled| tripled.checked_add(1))
            .ok_or(Error::CollatzOverflow { start, term: n })?
    };

    Ok(1 + chain_from(start, next)?)
}

/// Start in `1..limit` with the longest Collatz chain, lowest start on ties.
///
/// A `limit` of 1 yields 1, the start of the only chain of length one. A `limit` of 0
/// leaves nothing to scan and yields 0.
///
/// ```rust
/// use stepseq::euler::longest_chain_under;
///
/// assert_eq!(longest_chain_under(10), Ok(9));
/// assert_eq!(longest_chain_under(1), Ok(1));
/// ```
pub fn longest_chain_under(limit: u64) -> Result<u64> {
    if limit == 1 {
        return Ok(1);
    }

    let mut best_start = 0;
    let mut best_len = 0;
    for start in 1..limit {
        let len = chain_length(start)?;
        if len > best_len {
            best_len = len;
            best_start = start;
        }
    }

    debug!("longest chain under {limit} starts at {best_start} with {best_len} terms");
    Ok(best_start)
}
