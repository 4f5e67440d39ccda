//! Iterator adapter for producers.
//!
//! [`Traversal`] walks a producer one step per [`Iterator::next`] call, which makes the
//! standard iterator adapters available on top of any [`Producer`].
//!
//! # Examples
//!
//! ```rust
//! use stepseq::prelude::*;
//!
//! let odd_squares: Vec<u64> = range(1_u64, 2, 10).traverse().map(|v| v * v).collect();
//! assert_eq!(odd_squares, vec![1, 9, 25, 49, 81]);
//! ```

use crate::{Ctx, Emission, Producer};

/// Iterator over the values of one traversal of a producer.
///
/// The traversal is fused: after the producer emits `Stop` it is never stepped again and
/// every later call to `next` returns `None`.
pub struct Traversal<T, P>
where
    P: Producer<T>,
{
    producer: P,
    ctx: Option<Ctx<T>>,
}

impl<T, P> Traversal<T, P>
where
    P: Producer<T>,
{
    /// Start a traversal from [`Ctx::Initial`].
    pub fn new(producer: P) -> Self {
        Self::resume(producer, Ctx::Initial)
    }

    /// Continue a traversal from a context obtained earlier.
    pub fn resume(producer: P, ctx: Ctx<T>) -> Self {
        Self {
            producer,
            ctx: Some(ctx),
        }
    }

    /// Check if the producer has signalled `Stop`.
    pub fn is_exhausted(&self) -> bool {
        self.ctx.is_none()
    }

    /// The context the next step would receive, `None` once exhausted.
    pub fn context(&self) -> Option<&Ctx<T>> {
        self.ctx.as_ref()
    }

    pub fn into_producer(self) -> P {
        self.producer
    }
}

impl<T, P> Iterator for Traversal<T, P>
where
    P: Producer<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let ctx = self.ctx.take()?;
        match self.producer.step(ctx) {
            (next_ctx, Emission::Value(value)) => {
                self.ctx = Some(next_ctx);
                Some(value)
            }
            (_, Emission::Stop) => None,
        }
    }
}

impl<T, P> std::iter::FusedIterator for Traversal<T, P> where P: Producer<T> {}

/// Iterate over a fresh traversal of `producer`.
pub fn traverse<T, P>(producer: P) -> Traversal<T, P>
where
    P: Producer<T>,
{
    Traversal::new(producer)
}
