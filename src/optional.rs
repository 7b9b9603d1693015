//! Optional type - presence or absence of a value.
//!
//! This module provides `Optional<T>`, a tiny immutable container
//! representing "a value or nothing". It is intentionally NOT an error
//! carrier; use [`Try`](crate::result::Try) for failures.
//!
//! Absence is normal, not exceptional: wrapping a missing value never
//! raises, and combinators on an empty `Optional` simply stay empty.
//!
//! # Examples
//!
//! ```rust
//! use triptych::optional::Optional;
//!
//! let trimmed = Optional::of("  hi  ")
//!     .map(str::trim)
//!     .filter(|s| !s.is_empty())
//!     .or_else("");
//! assert_eq!(trimmed, "hi");
//!
//! let fallback = Optional::<String>::empty().or_else_get(|| "fallback".to_string());
//! assert_eq!(fallback, "fallback");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::result::{Caught, Try};

/// The error produced when [`Optional::run_catching`] is invoked on an
/// empty `Optional`: there was nothing to compute on.
///
/// # Examples
///
/// ```rust
/// use triptych::optional::{EmptyOptionalError, Optional};
///
/// let result = Optional::<&str>::empty().run_catching(|s| s.parse::<i32>());
/// assert!(result.err().is_some_and(|caught| caught.is::<EmptyOptionalError>()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyOptionalError;

impl fmt::Display for EmptyOptionalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Optional is empty")
    }
}

impl Error for EmptyOptionalError {}

/// An immutable container holding zero or one value of type `T`.
///
/// `Optional` is constructed once and never mutated; every combinator
/// either returns a new `Optional` or collapses into a raw value. The
/// canonical empty value is produced by [`Optional::empty`] and is
/// value-equal to every other empty `Optional` — equality, not
/// identity, is the observable contract.
///
/// # Examples
///
/// ```rust
/// use triptych::optional::Optional;
///
/// let present = Optional::of(3);
/// assert_eq!(present.map(|x| x + 1), Optional::of(4));
///
/// let absent: Optional<i32> = Optional::empty();
/// assert_eq!(absent.map(|x| x + 1), Optional::empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let value = Optional::of("A");
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Wraps a possibly-absent native value; `None` yields the
    /// canonical empty `Optional`. No error is raised for absent input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::of_nullable(Some(42)), Optional::of(42));
    /// assert_eq!(Optional::<i32>::of_nullable(None), Optional::empty());
    /// ```
    #[inline]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// Returns the canonical empty `Optional`.
    ///
    /// This allocates nothing; every empty `Optional` is value-equal to
    /// every other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let empty: Optional<String> = Optional::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns the raw payload, or `None` when empty. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::of("X").get(), Some("X"));
    /// assert_eq!(Optional::<&str>::empty().get(), None);
    /// ```
    #[inline]
    pub fn get(self) -> Option<T> {
        self.value
    }

    /// Returns a reference to the payload, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let value = Optional::of(42);
    /// assert_eq!(value.get_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn get_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if a value is present (readability sugar).
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        self.value.is_some()
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs a side effect on the value if present, then returns the
    /// same `Optional` for further chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut seen = None;
    /// let value = Optional::of(10).apply(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(10));
    /// assert_eq!(value, Optional::of(10));
    /// ```
    #[inline]
    pub fn apply<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    /// Runs a side effect regardless of presence, then returns the same
    /// `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut visits = 0;
    /// let value = Optional::<i32>::empty().and(|| visits += 1);
    /// assert_eq!(visits, 1);
    /// assert!(value.is_empty());
    /// ```
    #[inline]
    pub fn and<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        action();
        self
    }

    /// Runs the action only if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut seen = None;
    /// Optional::of("ping").if_present(|s| seen = Some(s.len()));
    /// assert_eq!(seen, Some(4));
    /// ```
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
    }

    /// Runs the action only if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut missing = false;
    /// Optional::<i32>::empty().if_empty(|| missing = true);
    /// assert!(missing);
    /// ```
    #[inline]
    pub fn if_empty<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.value.is_none() {
            action();
        }
    }

    /// Runs exactly one of the two actions, chosen by presence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut log = Vec::new();
    /// Optional::of("A").if_empty_or_else(
    ///     || log.push("no value".to_string()),
    ///     |v| log.push(format!("got {v}")),
    /// );
    /// assert_eq!(log, vec!["got A".to_string()]);
    /// ```
    #[inline]
    pub fn if_empty_or_else<F, G>(&self, if_empty: F, or_else: G)
    where
        F: FnOnce(),
        G: FnOnce(&T),
    {
        match &self.value {
            None => if_empty(),
            Some(value) => or_else(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps a present value to another value; empty stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let length = Optional::of("abc").map(|s| s.len());
    /// assert_eq!(length, Optional::of(3));
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => Optional::of(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Maps a present value with a mapper whose result is itself
    /// possibly absent; an absent result yields an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let parsed = Optional::of("42").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Optional::of(42));
    ///
    /// let failed = Optional::of("N/A").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(failed, Optional::empty());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.value {
            Some(value) => Optional::of_nullable(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Applies the mapper to the raw payload unconditionally, including
    /// when absent. A deliberate absence-propagating escape hatch: the
    /// mapper must handle `None` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let length = Optional::<&str>::empty().map_to(|raw| raw.map_or(0, str::len));
    /// assert_eq!(length, 0);
    /// ```
    #[inline]
    pub fn map_to<U, F>(self, mapper: F) -> U
    where
        F: FnOnce(Option<T>) -> U,
    {
        mapper(self.value)
    }

    /// Chains a mapper that returns another `Optional`; empty stays
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let parsed = Optional::of("42").flat_map(|s| match s.parse::<i32>() {
    ///     Ok(n) => Optional::of(n),
    ///     Err(_) => Optional::empty(),
    /// });
    /// assert_eq!(parsed, Optional::of(42));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.value {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the value only if the predicate holds; empty stays empty
    /// and the predicate is not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::of(6).filter(|x| x % 2 == 0), Optional::of(6));
    /// assert_eq!(Optional::of(5).filter(|x| x % 2 == 0), Optional::empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.value {
            Some(value) => {
                if predicate(&value) {
                    Self::of(value)
                } else {
                    Self::empty()
                }
            }
            None => Self::empty(),
        }
    }

    /// Keeps the value only if the predicate holds. Alias of
    /// [`filter`](Self::filter) mirroring Kotlin's scope functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::of("abc").take_if(|v| v.len() > 2), Optional::of("abc"));
    /// assert_eq!(Optional::of("a").take_if(|v| v.len() > 2), Optional::empty());
    /// ```
    #[inline]
    pub fn take_if<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(predicate)
    }

    /// Keeps the value only if the predicate does NOT hold; empty stays
    /// empty and the predicate is not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::of("a").take_unless(|v| v.len() > 2), Optional::of("a"));
    /// assert_eq!(Optional::of("abc").take_unless(|v| v.len() > 2), Optional::empty());
    /// ```
    #[inline]
    pub fn take_unless<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.value {
            Some(value) => {
                if predicate(&value) {
                    Self::empty()
                } else {
                    Self::of(value)
                }
            }
            None => Self::empty(),
        }
    }

    // =========================================================================
    // Collapsing
    // =========================================================================

    /// Transforms a present value via `mapper`, or computes the
    /// fallback when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let size = Optional::of("abc").if_present_or_else(|s| s.len(), || 0);
    /// assert_eq!(size, 3);
    /// ```
    #[inline]
    pub fn if_present_or_else<R, F, G>(self, mapper: F, or_else: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self.value {
            Some(value) => mapper(value),
            None => or_else(),
        }
    }

    /// Branches between two suppliers, ignoring the actual value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let tag = Optional::<String>::empty().branch(|| "present", || "empty");
    /// assert_eq!(tag, "empty");
    /// ```
    #[inline]
    pub fn branch<R, F, G>(self, if_present: F, if_empty: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce() -> R,
    {
        match self.value {
            Some(_) => if_present(),
            None => if_empty(),
        }
    }

    /// Returns the value if present, else the eager fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::<&str>::empty().or_else("fallback"), "fallback");
    /// assert_eq!(Optional::of("value").or_else("fallback"), "value");
    /// ```
    #[inline]
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the value if present, else computes the fallback lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let value = Optional::<String>::empty().or_else_get(|| "fallback".to_string());
    /// assert_eq!(value, "fallback");
    /// ```
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Returns the value if present, otherwise panics with the supplied
    /// error.
    ///
    /// For a recoverable variant see [`ok_or_else`](Self::ok_or_else).
    ///
    /// # Panics
    ///
    /// Panics with the supplied error's message when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let value = Optional::of(7).or_else_throw(|| "no value");
    /// assert_eq!(value, 7);
    /// ```
    #[inline]
    pub fn or_else_throw<E, F>(self, error: F) -> T
    where
        E: fmt::Display,
        F: FnOnce() -> E,
    {
        match self.value {
            Some(value) => value,
            None => panic!("{}", error()),
        }
    }

    /// Returns the value if present, otherwise the supplied error as a
    /// native `Result`.
    ///
    /// # Errors
    ///
    /// Returns the supplied error when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let missing: Result<i32, &str> = Optional::empty().ok_or_else(|| "no value");
    /// assert_eq!(missing, Err("no value"));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(error)
    }

    /// Converts into the native `Option` type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert_eq!(Optional::of("x").into_option(), Some("x"));
    /// assert_eq!(Optional::<&str>::empty().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    // =========================================================================
    // Bridge to Try
    // =========================================================================

    /// Runs a fallible transformation against the contained value and
    /// captures the outcome as a [`Try`].
    ///
    /// A present value invokes `mapper`; an `Err` result or a panic
    /// inside `mapper` is captured as `Failure`, any other outcome is
    /// `Success`. An empty `Optional` yields
    /// `Failure(`[`EmptyOptionalError`]`)` without invoking `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let parsed = Optional::of("42").run_catching(|s| s.parse::<i32>());
    /// assert_eq!(parsed.ok(), Some(42));
    ///
    /// let failed = Optional::of("N/A").run_catching(|s| s.parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn run_catching<U, E, F>(self, mapper: F) -> Try<U>
    where
        E: Error + Send + 'static,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.value {
            Some(value) => match panic::catch_unwind(AssertUnwindSafe(|| mapper(value))) {
                Ok(Ok(result)) => Try::Success(result),
                Ok(Err(error)) => Try::failure(error),
                Err(payload) => Try::Failure(Caught::from_panic(payload)),
            },
            None => Try::failure(EmptyOptionalError),
        }
    }
}

// =============================================================================
// Runtime Type Inspection
// =============================================================================

impl<T: Any> Optional<T> {
    /// Returns `true` if a value is present and its concrete type is
    /// `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// assert!(Optional::of(10_i32).is_instance::<i32>());
    /// assert!(!Optional::of(10_i32).is_instance::<String>());
    /// assert!(!Optional::<i32>::empty().is_instance::<i32>());
    /// ```
    #[inline]
    pub fn is_instance<U: Any>(&self) -> bool {
        match &self.value {
            Some(value) => {
                let value: &dyn Any = value;
                value.is::<U>()
            }
            None => false,
        }
    }

    /// Narrows the payload to `U` if present and of that type;
    /// otherwise empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let narrowed = Optional::of(10_i32).if_instance::<i32>();
    /// assert_eq!(narrowed, Optional::of(10));
    ///
    /// let mismatched = Optional::of(10_i32).if_instance::<String>();
    /// assert_eq!(mismatched, Optional::empty());
    /// ```
    #[inline]
    pub fn if_instance<U: Any>(self) -> Optional<U> {
        match self.value {
            Some(value) => {
                let boxed: Box<dyn Any> = Box::new(value);
                match boxed.downcast::<U>() {
                    Ok(narrowed) => Optional::of(*narrowed),
                    Err(_) => Optional::empty(),
                }
            }
            None => Optional::empty(),
        }
    }

    /// Keeps the value only if its concrete type is NOT `U`; an empty
    /// `Optional` stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let kept = Optional::of("x").if_not_instance::<i32>();
    /// assert_eq!(kept, Optional::of("x"));
    ///
    /// let dropped = Optional::of("x").if_not_instance::<&str>();
    /// assert_eq!(dropped, Optional::empty());
    /// ```
    #[inline]
    pub fn if_not_instance<U: Any>(self) -> Self {
        if self.value.is_none() || self.is_instance::<U>() {
            Self::empty()
        } else {
            self
        }
    }

    /// Runs the action on the narrowed payload when it is a `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut seen = None;
    /// Optional::of("abc").when_instance::<&str, _>(|s| seen = Some(s.len()));
    /// assert_eq!(seen, Some(3));
    /// ```
    #[inline]
    pub fn when_instance<U, F>(&self, action: F)
    where
        U: Any,
        F: FnOnce(&U),
    {
        if let Some(value) = &self.value {
            let value: &dyn Any = value;
            if let Some(narrowed) = value.downcast_ref::<U>() {
                action(narrowed);
            }
        }
    }

    /// Runs a no-argument effect when the payload is a `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    ///
    /// let mut matched = false;
    /// Optional::of("abc").when_instance_run::<&str, _>(|| matched = true);
    /// assert!(matched);
    /// ```
    #[inline]
    pub fn when_instance_run<U, F>(&self, action: F)
    where
        U: Any,
        F: FnOnce(),
    {
        if self.is_instance::<U>() {
            action();
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    /// The default `Optional` is empty.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Optional[{value:?}]"),
            None => formatter.write_str("Optional.empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Optional[{value}]"),
            None => formatter.write_str("Optional.empty"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::of_nullable)
    }
}

// Immutable value type: safe to share across threads whenever the
// payload is.
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync);
