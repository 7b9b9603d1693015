//! Try type - the outcome of a fallible computation.
//!
//! This module provides `Try<T>`, an immutable sum type with exactly two
//! variants: `Success(value)` or `Failure(error)`. It carries failures
//! as data instead of letting them propagate up the call stack, in the
//! spirit of Kotlin's `Result` and the FP Try monad.
//!
//! The captured error lives in a [`Caught`] payload which records the
//! concrete error type and its message. Two `Failure` values compare
//! equal when they hold the same *kind* of error with the same message,
//! even when the error objects were constructed independently.
//!
//! # Examples
//!
//! ```rust
//! use triptych::result::Try;
//!
//! let doubled = Try::success(10)
//!     .map(|x| x * 2)
//!     .on_success(|v| assert_eq!(*v, 20));
//! assert_eq!(doubled.ok(), Some(20));
//!
//! let recovered = Try::<i32>::failure(std::io::Error::other("boom")).recover(|_| 0);
//! assert_eq!(recovered, 0);
//! ```

use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic;

use crate::either::Either;
use crate::optional::Optional;

// =============================================================================
// Caught
// =============================================================================

/// How a [`Caught`] error came to be: a plain error value returned by a
/// fallible computation, or a panic payload captured mid-flight.
enum Origin {
    Error(Box<dyn Error + Send + 'static>),
    Panic(Box<dyn Any + Send + 'static>),
}

/// A captured error: the payload of [`Try::Failure`].
///
/// Records the concrete error's type identity (its *kind*), its type
/// name, its rendered message, and the original error value. Equality
/// and hashing are defined over **(kind, message)** only — never deep
/// equality of the error object — so two independently constructed
/// errors of the same kind and message compare equal. This keeps
/// failure comparisons deterministic in tests.
///
/// # Examples
///
/// ```rust
/// use triptych::result::Caught;
///
/// let first = Caught::of(std::io::Error::other("boom"));
/// let second = Caught::of(std::io::Error::other("boom"));
/// assert_eq!(first, second);
///
/// let other = Caught::of(std::io::Error::other("bang"));
/// assert_ne!(first, other);
/// ```
pub struct Caught {
    kind: TypeId,
    type_name: &'static str,
    message: String,
    origin: Origin,
}

impl Caught {
    /// Captures an error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Caught;
    ///
    /// let caught = Caught::of(std::io::Error::other("boom"));
    /// assert_eq!(caught.message(), "boom");
    /// assert!(caught.is::<std::io::Error>());
    /// ```
    pub fn of<E>(error: E) -> Self
    where
        E: Error + Send + 'static,
    {
        Self {
            kind: TypeId::of::<E>(),
            type_name: std::any::type_name::<E>(),
            message: error.to_string(),
            origin: Origin::Error(Box::new(error)),
        }
    }

    /// Captures a panic payload, as produced by
    /// `std::panic::catch_unwind`.
    ///
    /// The message is recovered from `&str` and `String` payloads, the
    /// two shapes `panic!` produces; any other payload renders as
    /// `"panic"`.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = payload.downcast_ref::<&'static str>().map_or_else(
            || {
                payload
                    .downcast_ref::<String>()
                    .map_or_else(|| String::from("panic"), Clone::clone)
            },
            |s| (*s).to_string(),
        );
        Self {
            kind: payload.as_ref().type_id(),
            type_name: "panic",
            message,
            origin: Origin::Panic(payload),
        }
    }

    /// The rendered message of the captured error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The name of the captured error's concrete type, or `"panic"` for
    /// a captured panic.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The type identity of the captured error — the *kind* that
    /// equality compares.
    #[inline]
    pub const fn kind(&self) -> TypeId {
        self.kind
    }

    /// Returns `true` if the captured error's concrete type is `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Caught;
    ///
    /// let caught = Caught::of(std::io::Error::other("boom"));
    /// assert!(caught.is::<std::io::Error>());
    /// assert!(!caught.is::<std::fmt::Error>());
    /// ```
    #[inline]
    pub fn is<E: 'static>(&self) -> bool {
        self.kind == TypeId::of::<E>()
    }

    /// Borrows the captured error as its concrete type, when it is an
    /// `E`. Captured panics never downcast.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use triptych::result::Caught;
    ///
    /// let caught = Caught::of("NaN".parse::<i32>().unwrap_err());
    /// assert!(caught.downcast_ref::<ParseIntError>().is_some());
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match &self.origin {
            Origin::Error(error) => error.downcast_ref::<E>(),
            Origin::Panic(_) => None,
        }
    }

    /// Returns `true` if this captures a panic rather than a plain
    /// error value.
    #[inline]
    pub fn is_panic(&self) -> bool {
        matches!(self.origin, Origin::Panic(_))
    }

    /// Re-raises the captured failure. A captured panic resumes with
    /// its original payload, preserving identity for panic-hook
    /// consumers; a plain error is wrapped in a fresh panic.
    fn rethrow(self) -> ! {
        match self.origin {
            Origin::Panic(payload) => panic::resume_unwind(payload),
            Origin::Error(error) => panic!("Try failed with a captured error: {error}"),
        }
    }
}

impl PartialEq for Caught {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Caught {}

impl Hash for Caught {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.type_name, self.message)
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Caught")
            .field("type_name", &self.type_name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Error for Caught {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.origin {
            Origin::Error(error) => {
                let source: &(dyn Error + 'static) = error.as_ref();
                Some(source)
            }
            Origin::Panic(_) => None,
        }
    }
}

// =============================================================================
// Try
// =============================================================================

/// The outcome of a fallible computation: `Success(value)` or
/// `Failure(error)`.
///
/// Both variants are terminal — set once at construction, never
/// transitioned. Every transformation (`map`, `flat_map`, `fold`,
/// `recover`) produces a new value; a `Failure` propagates its captured
/// [`Caught`] unchanged through `map`/`flat_map` chains, and only
/// [`recover`](Try::recover) and [`fold`](Try::fold) convert the
/// failure branch back into a plain value.
///
/// # Examples
///
/// ```rust
/// use triptych::result::Try;
///
/// let outcome = Try::success("42")
///     .flat_map(|s| match s.parse::<i32>() {
///         Ok(n) => Try::success(n),
///         Err(e) => Try::failure(e),
///     })
///     .map(|n| n + 1);
/// assert_eq!(outcome.ok(), Some(43));
/// ```
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the error travels as data.
    Failure(Caught),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let ok = Try::success("ok");
    /// assert!(ok.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` capturing the given error. The error payload
    /// is mandatory by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let failed: Try<i32> = Try::failure(std::io::Error::other("io"));
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Error + Send + 'static,
    {
        Self::Failure(Caught::of(error))
    }

    // =========================================================================
    // Variant Predicates
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the success value, or `None` for a `Failure`. Exactly
    /// one of `ok` and [`err`](Self::err) is non-absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// assert_eq!(Try::success(5).ok(), Some(5));
    /// assert_eq!(Try::<i32>::failure(std::io::Error::other("x")).ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the captured error, or `None` for a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let caught = Try::<i32>::failure(std::io::Error::other("x")).err();
    /// assert!(caught.is_some_and(|c| c.message() == "x"));
    /// ```
    #[inline]
    pub fn err(self) -> Option<Caught> {
        match self {
            Self::Success(_) => None,
            Self::Failure(caught) => Some(caught),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the captured error if present.
    #[inline]
    pub const fn err_ref(&self) -> Option<&Caught> {
        match self {
            Self::Success(_) => None,
            Self::Failure(caught) => Some(caught),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Maps the success value; a `Failure` propagates its captured
    /// error untouched, not re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// assert_eq!(Try::success(3).map(|x| x + 1).ok(), Some(4));
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(mapper(value)),
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    /// Chains a mapper that itself returns a `Try`; a `Failure`
    /// propagates untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let outcome = Try::success("42").flat_map(|s| match s.parse::<i32>() {
    ///     Ok(n) => Try::success(n),
    ///     Err(e) => Try::failure(e),
    /// });
    /// assert_eq!(outcome.ok(), Some(42));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs an action on the success value, then returns the same `Try`
    /// for further chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let mut seen = None;
    /// let outcome = Try::success(10).on_success(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(10));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs an action on the captured error, then returns the same
    /// `Try`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let mut message = None;
    /// let outcome = Try::<i32>::failure(std::io::Error::other("boom"))
    ///     .on_failure(|e| message = Some(e.message().to_string()));
    /// assert_eq!(message.as_deref(), Some("boom"));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Caught),
    {
        if let Self::Failure(caught) = &self {
            action(caught);
        }
        self
    }

    // =========================================================================
    // Recovery and Folding
    // =========================================================================

    /// Returns the success value, or computes a fallback on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// assert_eq!(Try::success(5).get_or_else(|| 0), 5);
    /// assert_eq!(Try::<i32>::failure(std::io::Error::other("x")).get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Recovers a failure by mapping the captured error to a plain
    /// value, exiting the failure state entirely. A success passes its
    /// value through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let recovered = Try::<i32>::failure(std::io::Error::other("e")).recover(|_| 1);
    /// assert_eq!(recovered, 1);
    /// ```
    #[inline]
    pub fn recover<F>(self, recovery: F) -> T
    where
        F: FnOnce(Caught) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => recovery(caught),
        }
    }

    /// Collapses into a single value via exactly one of the two
    /// functions, chosen by the active variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let rendered = Try::success(2).fold(
    ///     |error| format!("fail: {}", error.message()),
    ///     |value| format!("ok: {value}"),
    /// );
    /// assert_eq!(rendered, "ok: 2");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(Caught) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(caught) => on_failure(caught),
        }
    }

    /// Returns the success value, or re-raises the captured failure.
    ///
    /// # Panics
    ///
    /// A `Failure` holding a captured panic resumes that panic with its
    /// original payload; a `Failure` holding a plain error panics with
    /// a message wrapping it. The distinction mirrors rethrowing
    /// unchecked errors as-is while wrapping checked ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// assert_eq!(Try::success(7).get_or_throw(), 7);
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => caught.rethrow(),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an [`Either`]: `Success` becomes `Right`,
    /// `Failure` becomes `Left` carrying the [`Caught`] error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    /// use triptych::result::Try;
    ///
    /// let either = Try::success(5).to_either();
    /// assert_eq!(either, Either::Right(5));
    ///
    /// let either = Try::<i32>::failure(std::io::Error::other("x")).to_either();
    /// assert!(either.is_left());
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<Caught, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(caught) => Either::Left(caught),
        }
    }

    /// Converts into an [`Optional`]: `Success` becomes present,
    /// `Failure` becomes empty and the error is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::optional::Optional;
    /// use triptych::result::Try;
    ///
    /// assert_eq!(Try::success(5).to_option(), Optional::of(5));
    /// assert_eq!(Try::<i32>::failure(std::io::Error::other("x")).to_option(), Optional::empty());
    /// ```
    #[inline]
    pub fn to_option(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::of(value),
            Self::Failure(_) => Optional::empty(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Error + Send + 'static,
{
    /// Converts a native `Result`: `Ok` becomes `Success`, `Err` is
    /// captured as `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::result::Try;
    ///
    /// let outcome: Try<i32> = "42".parse::<i32>().into();
    /// assert_eq!(outcome.ok(), Some(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T: PartialEq> PartialEq for Try<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => left == right,
            (Self::Failure(left), Self::Failure(right)) => left == right,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Try<T> {}

impl<T: Hash> Hash for Try<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Success(value) => {
                0_u8.hash(state);
                value.hash(state);
            }
            Self::Failure(caught) => {
                1_u8.hash(state);
                caught.hash(state);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(caught) => formatter.debug_tuple("Failure").field(caught).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(caught) => write!(formatter, "Failure({caught})"),
        }
    }
}

// A captured panic payload is Send but not Sync, so Try is asserted
// Send only.
static_assertions::assert_impl_all!(Caught: Send);
static_assertions::assert_impl_all!(Try<i32>: Send);
