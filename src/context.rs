//! State threaded between producer steps.
//!
//! A [`Ctx`] is everything a producer remembers about a traversal. The producer itself
//! holds only its configuration; after each step it hands back the context the next
//! step should see.

/// Producer state carried from one step to the next.
///
/// `Initial` means no step has been taken yet in the current traversal. `Active` carries
/// the value the producer emitted last.
///
/// ```rust
/// use stepseq::Ctx;
///
/// let fresh: Ctx<u32> = Ctx::default();
/// assert!(fresh.is_initial());
///
/// let running = Ctx::Active(4_u32);
/// assert_eq!(running.active(), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ctx<T> {
    /// No step taken yet
    #[default]
    Initial,
    /// Carries the last emitted value
    Active(T),
}

impl<T> Ctx<T> {
    #[inline]
    pub const fn is_initial(&self) -> bool {
        matches!(self, Ctx::Initial)
    }

    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, Ctx::Active(_))
    }

    /// Returns the last emitted value, or `None` before the first step.
    #[inline]
    pub fn active(self) -> Option<T> {
        match self {
            Ctx::Initial => None,
            Ctx::Active(v) => Some(v),
        }
    }

    /// Converts from `&Ctx<T>` to `Ctx<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Ctx<&T> {
        match self {
            Ctx::Initial => Ctx::Initial,
            Ctx::Active(v) => Ctx::Active(v),
        }
    }

    /// Maps the carried value, leaving `Initial` untouched.
    ///
    /// ```rust
    /// use stepseq::Ctx;
    ///
    /// assert_eq!(Ctx::Active(2).map(|v| v * 10), Ctx::Active(20));
    /// assert_eq!(Ctx::<i32>::Initial.map(|v| v * 10), Ctx::Initial);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Ctx<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ctx::Initial => Ctx::Initial,
            Ctx::Active(v) => Ctx::Active(f(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_initial() {
        let ctx: Ctx<i64> = Ctx::default();
        assert!(ctx.is_initial());
        assert!(!ctx.is_active());
        assert_eq!(ctx.active(), None);
    }

    #[test]
    fn test_active_carries_value() {
        let ctx = Ctx::Active(0_i64);
        assert!(ctx.is_active());
        assert_eq!(ctx.active(), Some(0));
    }

    #[test]
    fn test_as_ref_and_map() {
        let ctx = Ctx::Active("abc".to_string());
        assert_eq!(ctx.as_ref().map(|s| s.len()), Ctx::Active(3));
        assert_eq!(ctx, Ctx::Active("abc".to_string()));
    }
}
