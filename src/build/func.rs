use crate::{Producer, context::Ctx, emission::Emission};

pub struct FromFn<F>(F);

impl<T, F> Producer<T> for FromFn<F>
where
    F: Fn(Ctx<T>) -> (Ctx<T>, Emission<T>),
{
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        (self.0)(ctx)
    }
}

/// Create a producer from a closure.
///
/// The closure must be `Fn`: anything it needs to remember between steps goes into the
/// context it returns.
///
/// ```rust
/// use stepseq::prelude::*;
///
/// // Powers of two below 100.
/// let powers = from_fn(|ctx: Ctx<u32>| {
///     let next = match ctx {
///         Ctx::Initial => 1,
///         Ctx::Active(v) => v * 2,
///     };
///     if next < 100 {
///         (Ctx::Active(next), Emission::Value(next))
///     } else {
///         (Ctx::Initial, Emission::Stop)
///     }
/// });
/// assert_eq!(take(20, powers), vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}
