//! Serialization tests for the `serde` feature.
//!
//! Optional serializes transparently as the native Option does; Either
//! uses the externally tagged enum representation.

#![cfg(feature = "serde")]

use triptych::either::Either;
use triptych::optional::Optional;

use rstest::rstest;

#[rstest]
fn optional_serializes_transparently() {
    let present = Optional::of(42);
    assert_eq!(serde_json::to_string(&present).unwrap(), "42");

    let absent: Optional<i32> = Optional::empty();
    assert_eq!(serde_json::to_string(&absent).unwrap(), "null");
}

#[rstest]
fn optional_roundtrips_through_json() {
    let present: Optional<String> = serde_json::from_str("\"hi\"").unwrap();
    assert_eq!(present, Optional::of("hi".to_string()));

    let absent: Optional<String> = serde_json::from_str("null").unwrap();
    assert_eq!(absent, Optional::empty());
}

#[rstest]
fn either_uses_the_tagged_representation() {
    let right: Either<String, i32> = Either::Right(5);
    assert_eq!(serde_json::to_string(&right).unwrap(), "{\"Right\":5}");

    let left: Either<String, i32> = Either::Left("oops".to_string());
    assert_eq!(serde_json::to_string(&left).unwrap(), "{\"Left\":\"oops\"}");
}

#[rstest]
fn either_roundtrips_through_json() {
    let right: Either<String, i32> = serde_json::from_str("{\"Right\":5}").unwrap();
    assert_eq!(right, Either::Right(5));

    let left: Either<String, i32> = serde_json::from_str("{\"Left\":\"oops\"}").unwrap();
    assert_eq!(left, Either::Left("oops".to_string()));
}
