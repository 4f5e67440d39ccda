//! Building producers from scratch
//!
//! This module provides the concrete producers shipped with the crate and a way to turn a
//! closure into one.

mod func;
mod range;

pub use func::{FromFn, from_fn};
pub use range::{Progression, Range, range};
