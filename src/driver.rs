//! Functions for pulling values out of producers.
//!
//! [`take`] is the everyday entry point. [`pull`] is the same loop started from an
//! arbitrary context, reporting where the traversal left off so it can be resumed.

use log::{debug, trace};

use crate::context::Ctx;
use crate::emission::Emission;
use crate::producer::Producer;

/// Values gathered by [`pull`], together with the context to resume from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulled<T> {
    /// Produced values in emission order.
    pub values: Vec<T>,
    /// Context for the next step, or `None` once the producer has signalled `Stop`.
    pub resume: Option<Ctx<T>>,
}

impl<T> Pulled<T> {
    /// Returns `true` if the producer signalled `Stop` during the pull.
    pub fn is_exhausted(&self) -> bool {
        self.resume.is_none()
    }
}

/// Drive a producer for at most `n` steps starting from `ctx`.
///
/// Each iteration calls the producer exactly once. A `Stop` ends the loop immediately and
/// the context returned alongside it is dropped.
///
/// ```rust
/// use stepseq::prelude::*;
///
/// let digits = range(0, 1, 5);
/// let head = pull(2, &digits, Ctx::Initial);
/// assert_eq!(head.values, vec![0, 1]);
///
/// let rest = pull(10, &digits, head.resume.unwrap());
/// assert_eq!(rest.values, vec![2, 3, 4]);
/// assert!(rest.is_exhausted());
/// ```
pub fn pull<T, P>(n: usize, producer: P, ctx: Ctx<T>) -> Pulled<T>
where
    P: Producer<T>,
{
    let mut values = Vec::new();
    let mut ctx = ctx;

    for index in 0..n {
        let (next_ctx, emission) = producer.step(ctx);
        match emission {
            Emission::Value(value) => {
                trace!("step {index}: value emitted");
                values.push(value);
                ctx = next_ctx;
            }
            Emission::Stop => {
                debug!("producer stopped after {} values", values.len());
                return Pulled {
                    values,
                    resume: None,
                };
            }
        }
    }

    Pulled {
        values,
        resume: Some(ctx),
    }
}

/// Collect up to `n` values from a fresh traversal of `producer`.
///
/// The result is shorter than `n` exactly when the producer stops first.
///
/// ```rust
/// use stepseq::prelude::*;
///
/// assert_eq!(take(15, range(0, 1, 10)), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(take(3, range(0, 1, 10)), vec![0, 1, 2]);
/// ```
pub fn take<T, P>(n: usize, producer: P) -> Vec<T>
where
    P: Producer<T>,
{
    pull(n, producer, Ctx::Initial).values
}
