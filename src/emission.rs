/// Output of a single producer step: either a produced element or the end of the sequence.
///
/// `Emission` plays the role `Option` plays for [`Iterator::next`], but it is spelled out so
/// that producers read as state machines: a step either emits a `Value` or says `Stop`.
/// `Stop` is a variant of its own, so no value of `T` (a `0`, an empty string) is ever
/// mistaken for the end of the sequence.
///
/// # Examples
///
/// ```rust
/// use stepseq::Emission;
///
/// let produced: Emission<i32> = Emission::Value(42);
/// let exhausted: Emission<i32> = Emission::Stop;
///
/// assert_eq!(produced.map(|x| x * 2), Emission::Value(84));
/// assert!(exhausted.is_stop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Emission<T> {
    /// A produced element
    Value(T),
    /// The sequence is exhausted
    Stop,
}

impl<T> Emission<T> {
    /// Returns `true` if the emission is a `Value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepseq::Emission;
    ///
    /// let x: Emission<i32> = Emission::Value(0);
    /// assert!(x.is_value());
    ///
    /// let y: Emission<i32> = Emission::Stop;
    /// assert!(!y.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Emission::Value(_))
    }

    /// Returns `true` if the emission is `Stop`.
    #[inline]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Emission::Stop)
    }

    /// Converts from `Emission<T>` to `Option<T>`, discarding the stop signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepseq::Emission;
    ///
    /// assert_eq!(Emission::Value(7).value(), Some(7));
    /// assert_eq!(Emission::<i32>::Stop.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Emission::Value(v) => Some(v),
            Emission::Stop => None,
        }
    }

    /// Maps an `Emission<T>` to `Emission<U>` by applying a function to the produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepseq::Emission;
    ///
    /// let x = Emission::Value(3);
    /// assert_eq!(x.map(|v| v.to_string()), Emission::Value("3".to_string()));
    ///
    /// let y: Emission<i32> = Emission::Stop;
    /// assert_eq!(y.map(|v| v + 1), Emission::Stop);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Emission<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Emission::Value(v) => Emission::Value(f(v)),
            Emission::Stop => Emission::Stop,
        }
    }

    /// Returns the produced value or a default.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Emission::Value(v) => v,
            Emission::Stop => default,
        }
    }

    /// Returns the produced value or computes one from a closure.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Emission::Value(v) => v,
            Emission::Stop => f(),
        }
    }

    /// Converts from `&Emission<T>` to `Emission<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Emission<&T> {
        match self {
            Emission::Value(v) => Emission::Value(v),
            Emission::Stop => Emission::Stop,
        }
    }

    /// Returns `true` if the emission is a `Value` equal to `v`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepseq::Emission;
    ///
    /// let x = Emission::Value(42);
    /// assert!(x.contains(&42));
    /// assert!(!x.contains(&7));
    /// assert!(!Emission::<i32>::Stop.contains(&42));
    /// ```
    #[inline]
    pub fn contains<U>(&self, v: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Emission::Value(x) if v == x)
    }

    /// Returns the produced value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the emission is `Stop`.
    #[inline]
    pub fn expect_value(self, msg: &str) -> T {
        match self {
            Emission::Value(v) => v,
            Emission::Stop => panic!("{}", msg),
        }
    }

    /// Returns the produced value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the emission is `Stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepseq::Emission;
    ///
    /// assert_eq!(Emission::Value(42).unwrap_value(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use stepseq::Emission;
    ///
    /// Emission::<i32>::Stop.unwrap_value(); // panics
    /// ```
    #[inline]
    pub fn unwrap_value(self) -> T {
        match self {
            Emission::Value(v) => v,
            Emission::Stop => panic!("called `Emission::unwrap_value()` on a `Stop` value"),
        }
    }
}

impl<T> From<Option<T>> for Emission<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Emission::Value(v),
            None => Emission::Stop,
        }
    }
}

impl<T> From<Emission<T>> for Option<T> {
    fn from(emission: Emission<T>) -> Self {
        emission.value()
    }
}
