//! Arithmetic progressions.
//!
//! [`range`] builds a producer emitting `start, start + step, start + 2 * step, ...` for as
//! long as the value stays below `stop`.

use crate::{Producer, context::Ctx, emission::Emission};

/// Integer types a [`Range`] can step through.
///
/// `advance` returns `None` when `self + step` is not representable, which the range
/// treats as the end of the sequence.
pub trait Progression: Copy + PartialOrd {
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_progression {
    ($($t:ty),* $(,)?) => {
        $(
            impl Progression for $t {
                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_progression!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Producer of an arithmetic progression with an exclusive upper bound.
///
/// Created by [`range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    start: T,
    step: T,
    stop: T,
}

impl<T> Range<T> {
    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn step_size(&self) -> &T {
        &self.step
    }

    pub fn stop(&self) -> &T {
        &self.stop
    }
}

/// Create a producer emitting `start`, `start + step`, ... while the value is `< stop`.
///
/// Once a value would reach `stop` the producer emits [`Emission::Stop`] and resets its
/// context to [`Ctx::Initial`]. With `step <= 0` and `start < stop` the progression never
/// reaches `stop`, so the sequence is infinite and has to be bounded by the driver.
///
/// ```rust
/// use stepseq::prelude::*;
///
/// assert_eq!(take(15, range(0, 1, 10)), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(take(15, range(10, 1, 10)), Vec::<i32>::new());
/// assert_eq!(take(4, range(3, 0, 10)), vec![3, 3, 3, 3]);
/// ```
pub fn range<T: Progression>(start: T, step: T, stop: T) -> Range<T> {
    Range { start, step, stop }
}

impl<T: Progression> Producer<T> for Range<T> {
    fn step(&self, ctx: Ctx<T>) -> (Ctx<T>, Emission<T>) {
        let candidate = match ctx {
            Ctx::Initial => Some(self.start),
            Ctx::Active(value) => value.advance(self.step),
        };

        match candidate {
            Some(next) if next < self.stop => (Ctx::Active(next), Emission::Value(next)),
            _ => (Ctx::Initial, Emission::Stop),
        }
    }
}
