//! # Stepseq: Lazy Sequences from Pure Step Functions
//!
//! Build lazy sequences out of step functions that carry their state explicitly, and pull
//! values out of them on demand.
//!
//! ## Core Types
//!
//! - **[`Producer<T>`]**: A pure step function from a context to the next context and an emission
//! - **[`Ctx<T>`]**: State threaded between steps, `Initial` or `Active(last_value)`
//! - **[`Emission<T>`]**: Outcome of one step, `Value(v)` or `Stop`
//!
//! ## Example
//!
//! ```
//! use stepseq::*;
//!
//! // 0, 1, ..., 9 and then Stop, so asking for 15 values gets 10.
//! let digits = range(0, 1, 10);
//! assert_eq!(take(15, &digits), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! // Producers are pure: the same producer traverses again from scratch.
//! assert_eq!(take(3, &digits), vec![0, 1, 2]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Producers:**
//! - [`range(start, step, stop)`](range) - Arithmetic progression below `stop`
//! - [`from_fn(f)`](from_fn) - Producer from a closure
//!
//! **Driving:**
//! - [`take(n, producer)`](take) - Collect up to `n` values
//! - [`pull(n, producer, ctx)`](pull) - Resumable variant of `take`
//! - [`traverse(producer)`](traverse) - Iterate lazily
//!
//! The [`euler`] module holds two unrelated puzzle solvers that ship with the command-line
//! tool.

pub mod build;
mod context;
mod driver;
mod emission;
pub mod error;
pub mod euler;
mod iter;
pub mod prelude;
mod producer;

pub use build::*;
pub use context::*;
pub use driver::*;
pub use emission::*;
pub use error::{Error, Result};
pub use iter::*;
pub use producer::*;
