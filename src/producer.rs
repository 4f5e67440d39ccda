//! Core trait for step-function producers.
//!
//! This module defines the [`Producer`] trait, the building block of every lazy sequence in
//! this crate. A producer is a pure step function: given the [`Ctx`] left behind by the
//! previous step it returns the next context together with an [`Emission`].
//!
//! # Examples
//!
//! ```rust
//! use stepseq::prelude::*;
//!
//! let digits = range(0, 1, 3);
//! let (ctx, first) = digits.step(Ctx::Initial);
//! assert_eq!(first, Emission::Value(0));
//! let (_, second) = digits.step(ctx);
//! assert_eq!(second, Emission::Value(1));
//! ```

use std::{rc::Rc, sync::Arc};

use crate::{context::Ctx, emission::Emission, iter::Traversal};

/// A pure step function advancing a lazy sequence by one element.
///
/// `step` takes `&self`: a producer never mutates itself, so the same producer can drive
/// any number of traversals, each one restarted from [`Ctx::Initial`].
///
/// ```rust
/// use stepseq::prelude::*;
///
/// let evens = range(0_u32, 2, 7);
/// assert_eq!(take(10, &evens), vec![0, 2, 4, 6]);
/// assert_eq!(take(10, &evens), vec![0, 2, 4, 6]);
/// ```
pub trait Producer<T> {
    /// Compute the next context and emission from the current context.
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>);

    /// Iterate over the produced values, starting from [`Ctx::Initial`].
    fn traverse(self) -> Traversal<T, Self>
    where
        Self: Sized,
    {
        Traversal::new(self)
    }

    fn boxed<'a>(self) -> Box<dyn Producer<T> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T, P> Producer<T> for &P
where
    P: Producer<T> + ?Sized,
{
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        (**self).step(ctx)
    }
}

impl<T, P> Producer<T> for Box<P>
where
    P: Producer<T> + ?Sized,
{
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        (**self).step(ctx)
    }
}

impl<T, P> Producer<T> for Rc<P>
where
    P: Producer<T> + ?Sized,
{
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        (**self).step(ctx)
    }
}

impl<T, P> Producer<T> for Arc<P>
where
    P: Producer<T> + ?Sized,
{
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        (**self).step(ctx)
    }
}

impl<T, L, R> Producer<T> for either::Either<L, R>
where
    L: Producer<T>,
    R: Producer<T>,
{
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        match self {
            either::Either::Left(l) => l.step(ctx),
            either::Either::Right(r) => r.step(ctx),
        }
    }
}
