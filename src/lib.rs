//! # triptych
//!
//! Three immutable algebraic containers with functional combinators:
//!
//! - [`Optional`](optional::Optional): presence or absence of a value,
//!   never an error carrier
//! - [`Try`](result::Try): the outcome of a fallible computation,
//!   `Success(value)` or `Failure(error)`
//! - [`Either`](either::Either): a general two-branch disjoint union,
//!   conventionally error-on-`Left` / success-on-`Right`
//!
//! Every container is constructed once and never mutated; every
//! combinator returns a new value. Failure and `Left` branches
//! short-circuit: once a chain has failed, later transformation
//! functions are never invoked and the captured payload passes through
//! unchanged.
//!
//! ## Overview
//!
//! ```rust
//! use triptych::prelude::*;
//!
//! // Optional: presence/absence
//! let length = Optional::of("abc").map(|s| s.len()).or_else(0);
//! assert_eq!(length, 3);
//!
//! // Try: capture fallible computations as data
//! let parsed = Optional::of("N/A")
//!     .run_catching(|s| s.parse::<i32>())
//!     .recover(|_| 0);
//! assert_eq!(parsed, 0);
//!
//! // Either: two-branch sum, Right-biased
//! let small: Either<&str, i32> = Either::Right(5).filter_or_else(|x| *x > 10, "small");
//! assert_eq!(small, Either::Left("small"));
//! ```
//!
//! ## Conversions
//!
//! `Try` converts into `Either` (`Success` -> `Right`, `Failure` ->
//! `Left`) and into `Optional` (`Success` -> present, `Failure` ->
//! empty); `Either` converts into `Optional` (`Right` -> present);
//! `Optional::run_catching` bridges into `Try`. The native `Option` and
//! `Result` types are supported as external collaborators through
//! `From`/`Into` implementations.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `Either`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use triptych::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::optional::{EmptyOptionalError, Optional};
    pub use crate::result::{Caught, Try};
}

pub mod either;
pub mod optional;
pub mod result;
