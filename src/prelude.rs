//! Commonly used imports
//!
//! Use `use stepseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Ctx, Emission, Producer};

// Constructors
pub use crate::build::{from_fn, range};

// Driving
pub use crate::driver::{Pulled, pull, take};
pub use crate::iter::{Traversal, traverse};
