//! Project Euler solvers.
//!
//! - [`collatz`]: problem 14, the start below a limit with the longest Collatz chain
//! - [`words`]: problem 17, letters used writing out 1 to 1000 in English

pub mod collatz;
pub mod words;

pub use collatz::{chain_length, longest_chain_under};
pub use words::{spell, sum_word_lengths};
