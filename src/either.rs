//! Either type - a general two-branch disjoint union.
//!
//! This module provides the `Either<L, R>` type, a value that is either
//! a `Left(L)` or a `Right(R)`. By convention the `Right` branch is the
//! "main" channel: `map` and `flat_map` transform `Right` values and
//! pass a `Left` through untouched, mirroring how
//! [`Try`](crate::result::Try) treats `Success`.
//!
//! # Examples
//!
//! ```rust
//! use triptych::either::Either;
//!
//! let score: Either<String, i32> = Either::Right(5);
//!
//! // Right-biased transformation
//! let doubled = score.map(|x| x * 2);
//! assert_eq!(doubled, Either::Right(10));
//!
//! // A Left short-circuits the chain
//! let failed: Either<String, i32> = Either::Left("oops".to_string());
//! let unchanged = failed.map(|x| x * 2);
//! assert_eq!(unchanged, Either::Left("oops".to_string()));
//!
//! // Collapse both branches into one value
//! let message = unchanged.fold(
//!     |error| format!("failed: {error}"),
//!     |value| format!("got {value}"),
//! );
//! assert_eq!(message, "failed: oops");
//! ```

use std::fmt;

use crate::optional::Optional;

/// A value that is one of two branches.
///
/// `Either<L, R>` holds exactly one payload, in either the `Left` or the
/// `Right` position. `Left` conventionally carries an error or the
/// secondary alternative; `Right` is the main channel that `map` and
/// `flat_map` operate on.
///
/// Two `Either` values are equal when they are the same variant with
/// equal payloads; a `Left` is never equal to a `Right`, even when the
/// payloads compare equal.
///
/// # Examples
///
/// ```rust
/// use triptych::either::Either;
///
/// let ok: Either<String, i32> = Either::Right(42);
/// let err: Either<String, i32> = Either::Left("bad input".to_string());
///
/// assert!(ok.is_right());
/// assert!(err.is_left());
/// assert_ne!(Either::<i32, i32>::Left(1), Either::<i32, i32>::Right(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left branch, conventionally an error or secondary alternative.
    Left(L),
    /// The right branch, conventionally the main channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Variant Predicates
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Payload Accessors
    // =========================================================================

    /// Returns the left payload, or `None` for a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left(), Some(42));
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right payload, or `None` for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left payload if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right payload if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.right_ref(), Some(&"hello".to_string()));
    /// ```
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs an action on the left payload if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let mut seen = None;
    /// let value: Either<i32, String> = Either::Left(42);
    /// value.if_left(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn if_left<F>(&self, action: F)
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = self {
            action(value);
        }
    }

    /// Runs an action on the right payload if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let mut seen = None;
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// value.if_right(|s| seen = Some(s.len()));
    /// assert_eq!(seen, Some(5));
    /// ```
    #[inline]
    pub fn if_right<F>(&self, action: F)
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = self {
            action(value);
        }
    }

    /// Runs exactly one of the two actions, chosen by the active variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let mut log = Vec::new();
    /// let value: Either<String, i32> = Either::Right(5);
    /// value.for_each(
    ///     |error| log.push(format!("left: {error}")),
    ///     |value| log.push(format!("right: {value}")),
    /// );
    /// assert_eq!(log, vec!["right: 5".to_string()]);
    /// ```
    #[inline]
    pub fn for_each<F, G>(self, left_action: F, right_action: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Self::Left(value) => left_action(value),
            Self::Right(value) => right_action(value),
        }
    }

    // =========================================================================
    // Joining
    // =========================================================================

    /// Resolves a `Left` by substituting `other`; a `Right` returns itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let first: Either<String, i32> = Either::Left("error 1".to_string());
    /// let second: Either<String, i32> = Either::Left("error 2".to_string());
    /// assert_eq!(first.join_left(second), Either::Left("error 2".to_string()));
    ///
    /// let ok: Either<String, i32> = Either::Right(5);
    /// let fallback: Either<String, i32> = Either::Left("unused".to_string());
    /// assert_eq!(ok.join_left(fallback), Either::Right(5));
    /// ```
    #[inline]
    pub fn join_left(self, other: Self) -> Self {
        match self {
            Self::Left(_) => other,
            Self::Right(_) => self,
        }
    }

    /// Resolves a `Right` by substituting `other`; a `Left` returns itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let first: Either<String, i32> = Either::Right(5);
    /// let second: Either<String, i32> = Either::Right(10);
    /// assert_eq!(first.join_right(second), Either::Right(10));
    ///
    /// let err: Either<String, i32> = Either::Left("error".to_string());
    /// let next: Either<String, i32> = Either::Right(10);
    /// assert_eq!(err.join_right(next), Either::Left("error".to_string()));
    /// ```
    #[inline]
    pub fn join_right(self, other: Self) -> Self {
        match self {
            Self::Left(_) => self,
            Self::Right(_) => other,
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps a `Right` whose payload satisfies the predicate; a failing
    /// `Right` becomes `Left(or_else)`.
    ///
    /// A `Left` passes through unchanged and the predicate is never
    /// evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<&str, i32> = Either::Right(5);
    /// let result = value.filter_or_else(|x| *x > 10, "value is too small");
    /// assert_eq!(result, Either::Left("value is too small"));
    ///
    /// let value: Either<&str, i32> = Either::Right(15);
    /// let result = value.filter_or_else(|x| *x > 10, "value is too small");
    /// assert_eq!(result, Either::Right(15));
    /// ```
    #[inline]
    pub fn filter_or_else<P>(self, predicate: P, or_else: L) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(or_else)
                }
            }
            Self::Left(_) => self,
        }
    }

    /// Returns `true` iff this is a `Right` whose payload satisfies the
    /// predicate. A `Left` yields `false` unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(15);
    /// assert!(value.exists(|x| *x > 10));
    /// assert!(!value.exists(|x| *x > 20));
    ///
    /// let value: Either<String, i32> = Either::Left("error".to_string());
    /// assert!(!value.exists(|x| *x > 10));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    // =========================================================================
    // Right-Biased Transformations
    // =========================================================================

    /// Applies a function to the right payload; a `Left` passes through
    /// with its payload untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(5);
    /// assert_eq!(value.map(|x| x * 10), Either::Right(50));
    ///
    /// let value: Either<String, i32> = Either::Left("oops".to_string());
    /// assert_eq!(value.map(|x| x * 10), Either::Left("oops".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a function that itself returns an `Either`; a `Left`
    /// passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(15);
    /// let result = value.flat_map(|x| {
    ///     if x > 10 {
    ///         Either::Right(x * 2)
    ///     } else {
    ///         Either::Left("value is too small".to_string())
    ///     }
    /// });
    /// assert_eq!(result, Either::Right(30));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies a function to the left payload; a `Right` passes through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<String, i32> = Either::Left("oops".to_string());
    /// assert_eq!(value.map_left(|e| e.len()), Either::Left(4));
    ///
    /// let value: Either<String, i32> = Either::Right(5);
    /// assert_eq!(value.map_left(|e: String| e.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies the matching one of two functions, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(2);
    /// assert_eq!(value.bimap(|e| e.len(), |x| x * 10), Either::Right(20));
    ///
    /// let value: Either<String, i32> = Either::Left("err".to_string());
    /// assert_eq!(value.bimap(|e| e.len(), |x| x * 10), Either::Left(3));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Collapses the `Either` into a single value by applying the
    /// function that matches the active variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(5);
    /// let message = value.fold(|e| format!("error: {e}"), |x| format!("success: {x}"));
    /// assert_eq!(message, "success: 5");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the branches: `Left(v)` becomes `Right(v)` and vice versa.
    ///
    /// Swapping twice restores the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let value: Either<&str, i32> = Either::Right(1);
    /// assert_eq!(value.swap(), Either::Left(1));
    /// assert_eq!(value.swap().swap(), value);
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts the right branch into an [`Optional`]: `Right` becomes
    /// present, `Left` becomes empty and its payload is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    /// use triptych::optional::Optional;
    ///
    /// let value: Either<String, i32> = Either::Right(5);
    /// assert_eq!(value.to_option(), Optional::of(5));
    ///
    /// let value: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(value.to_option(), Optional::empty());
    /// ```
    #[inline]
    pub fn to_option(self) -> Optional<R> {
        Optional::of_nullable(self.right())
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a native `Result`: `Ok` becomes `Right`, `Err` becomes
    /// `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let parsed: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = parsed.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts into a native `Result`: `Right` becomes `Ok`, `Left`
    /// becomes `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triptych::either::Either;
    ///
    /// let either: Either<String, i32> = Either::Left("error".to_string());
    /// let result: Result<i32, String> = either.into();
    /// assert_eq!(result, Err("error".to_string()));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// Immutable value type: safe to share across threads whenever the
// payloads are.
static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
