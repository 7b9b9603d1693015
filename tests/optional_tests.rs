//! Unit tests for the Optional<T> type.
//!
//! Optional represents presence or absence of a value and never carries
//! error semantics; `run_catching` bridges it into Try when a fallible
//! transformation is involved.

use std::num::ParseIntError;

use triptych::optional::{EmptyOptionalError, Optional};

use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn of_and_of_nullable_agree() {
    assert_eq!(Optional::of(42), Optional::of_nullable(Some(42)));
    assert_eq!(Optional::<i32>::of_nullable(None), Optional::empty());
}

#[rstest]
fn empty_is_canonical() {
    let first: Optional<String> = Optional::empty();
    let second: Optional<String> = Optional::empty();
    assert_eq!(first, second);
    assert_eq!(first, Optional::default());
}

// =============================================================================
// Observation
// =============================================================================

#[rstest]
fn get_returns_raw_payload() {
    assert_eq!(Optional::of("X").get(), Some("X"));
    assert_eq!(Optional::<&str>::empty().get(), None);
}

#[rstest]
fn get_ref_borrows_the_payload() {
    let value = Optional::of(42);
    assert_eq!(value.get_ref(), Some(&42));
    assert_eq!(Optional::<i32>::empty().get_ref(), None);
}

#[rstest]
fn presence_predicates() {
    let present = Optional::of("x");
    assert!(present.is_present());
    assert!(present.is_not_empty());
    assert!(!present.is_empty());

    let absent = Optional::<&str>::empty();
    assert!(absent.is_empty());
    assert!(!absent.is_present());
    assert!(!absent.is_not_empty());
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn apply_runs_only_when_present_and_chains() {
    let mut seen = None;
    let value = Optional::of(10).apply(|x| seen = Some(*x));
    assert_eq!(seen, Some(10));
    assert_eq!(value, Optional::of(10));

    let mut touched = false;
    let value = Optional::<i32>::empty().apply(|_| touched = true);
    assert!(!touched);
    assert!(value.is_empty());
}

#[rstest]
fn and_runs_unconditionally() {
    let mut visits = 0;
    let value = Optional::of("A").and(|| visits += 1);
    assert_eq!(visits, 1);
    assert_eq!(value, Optional::of("A"));

    let value = Optional::<&str>::empty().and(|| visits += 1);
    assert_eq!(visits, 2);
    assert!(value.is_empty());
}

#[rstest]
fn if_present_and_if_empty_are_conditional() {
    let mut seen = None;
    Optional::of("ping").if_present(|s| seen = Some(s.len()));
    assert_eq!(seen, Some(4));

    let mut touched = false;
    Optional::<&str>::empty().if_present(|_| touched = true);
    assert!(!touched);

    let mut missing = false;
    Optional::<&str>::empty().if_empty(|| missing = true);
    assert!(missing);

    let mut missing = false;
    Optional::of("x").if_empty(|| missing = true);
    assert!(!missing);
}

#[rstest]
fn if_empty_or_else_runs_exactly_one_branch() {
    let mut log = Vec::new();
    Optional::of("A").if_empty_or_else(
        || log.push("no value".to_string()),
        |v| log.push(format!("got {v}")),
    );
    assert_eq!(log, vec!["got A".to_string()]);

    let mut log = Vec::new();
    Optional::<&str>::empty().if_empty_or_else(
        || log.push("no value".to_string()),
        |v| log.push(format!("got {v}")),
    );
    assert_eq!(log, vec!["no value".to_string()]);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_transforms_a_present_value() {
    assert_eq!(Optional::of("abc").map(str::len), Optional::of(3));
    assert_eq!(Optional::<&str>::empty().map(str::len), Optional::empty());
}

#[rstest]
fn map_nullable_treats_an_absent_result_as_empty() {
    assert_eq!(Optional::of("42").map_nullable(|s| s.parse::<i32>().ok()), Optional::of(42));
    assert_eq!(Optional::of("N/A").map_nullable(|s| s.parse::<i32>().ok()), Optional::empty());
}

#[rstest]
fn map_to_applies_even_when_absent() {
    let length = Optional::<&str>::empty().map_to(|raw| raw.map_or(0, str::len));
    assert_eq!(length, 0);

    let length = Optional::of("abc").map_to(|raw| raw.map_or(0, str::len));
    assert_eq!(length, 3);
}

#[rstest]
fn flat_map_flattens_and_keeps_absence() {
    let parsed = Optional::of("42").flat_map(|s| Optional::of_nullable(s.parse::<i32>().ok()));
    assert_eq!(parsed, Optional::of(42));

    let absent = Optional::<&str>::empty()
        .flat_map(|_| -> Optional<i32> { panic!("mapper invoked on empty") });
    assert!(absent.is_empty());
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn filter_keeps_a_passing_value() {
    assert_eq!(Optional::of(6).filter(|x| x % 2 == 0), Optional::of(6));
    assert_eq!(Optional::of(5).filter(|x| x % 2 == 0), Optional::empty());
}

#[rstest]
fn filter_on_empty_does_not_evaluate_the_predicate() {
    let absent = Optional::<i32>::empty().filter(|_| panic!("predicate evaluated on empty"));
    assert!(absent.is_empty());
}

#[rstest]
fn take_if_and_take_unless_are_complementary() {
    assert_eq!(Optional::of("abc").take_if(|v| v.len() > 2), Optional::of("abc"));
    assert_eq!(Optional::of("a").take_if(|v| v.len() > 2), Optional::empty());

    assert_eq!(Optional::of("a").take_unless(|v| v.len() > 2), Optional::of("a"));
    assert_eq!(Optional::of("abc").take_unless(|v| v.len() > 2), Optional::empty());
}

#[rstest]
fn take_combinators_skip_the_predicate_when_empty() {
    let absent = Optional::<i32>::empty().take_if(|_| panic!("take_if evaluated on empty"));
    assert!(absent.is_empty());

    let absent = Optional::<i32>::empty().take_unless(|_| panic!("take_unless evaluated on empty"));
    assert!(absent.is_empty());
}

// =============================================================================
// Collapsing
// =============================================================================

#[rstest]
fn if_present_or_else_maps_or_falls_back() {
    assert_eq!(Optional::of("abc").if_present_or_else(|s| s.len(), || 0), 3);
    assert_eq!(Optional::<&str>::empty().if_present_or_else(|s| s.len(), || 0), 0);
}

#[rstest]
fn branch_ignores_the_value() {
    assert_eq!(Optional::of("x").branch(|| "present", || "empty"), "present");
    assert_eq!(Optional::<&str>::empty().branch(|| "present", || "empty"), "empty");
}

#[rstest]
fn or_else_is_eager_and_or_else_get_is_lazy() {
    assert_eq!(Optional::<&str>::empty().or_else("fallback"), "fallback");
    assert_eq!(Optional::of("value").or_else("fallback"), "value");

    assert_eq!(Optional::<&str>::empty().or_else_get(|| "fallback"), "fallback");

    let mut computed = false;
    let value = Optional::of("value").or_else_get(|| {
        computed = true;
        "fallback"
    });
    assert_eq!(value, "value");
    assert!(!computed);
}

#[rstest]
fn or_else_throw_returns_a_present_value() {
    assert_eq!(Optional::of(7).or_else_throw(|| "no value"), 7);
}

#[rstest]
#[should_panic(expected = "no value")]
fn or_else_throw_raises_when_empty() {
    let _ = Optional::<i32>::empty().or_else_throw(|| "no value");
}

#[rstest]
fn ok_or_else_converts_to_a_native_result() {
    let present: Result<i32, &str> = Optional::of(7).ok_or_else(|| "no value");
    assert_eq!(present, Ok(7));

    let absent: Result<i32, &str> = Optional::empty().ok_or_else(|| "no value");
    assert_eq!(absent, Err("no value"));
}

// =============================================================================
// Runtime Type Inspection
// =============================================================================

#[rstest]
fn is_instance_checks_the_concrete_type() {
    assert!(Optional::of(10_i32).is_instance::<i32>());
    assert!(!Optional::of(10_i32).is_instance::<String>());
    assert!(!Optional::<i32>::empty().is_instance::<i32>());
}

#[rstest]
fn if_instance_narrows_or_empties() {
    assert_eq!(Optional::of(10_i32).if_instance::<i32>(), Optional::of(10));
    assert_eq!(Optional::of(10_i32).if_instance::<String>(), Optional::empty());
    assert_eq!(Optional::<i32>::empty().if_instance::<i32>(), Optional::empty());
}

#[rstest]
fn if_not_instance_keeps_mismatches_only() {
    assert_eq!(Optional::of("x").if_not_instance::<i32>(), Optional::of("x"));
    assert_eq!(Optional::of("x").if_not_instance::<&str>(), Optional::empty());
    assert_eq!(Optional::<&str>::empty().if_not_instance::<i32>(), Optional::empty());
}

#[rstest]
fn when_instance_runs_only_on_a_match() {
    let mut seen = None;
    Optional::of("abc").when_instance::<&str, _>(|s| seen = Some(s.len()));
    assert_eq!(seen, Some(3));

    let mut touched = false;
    Optional::of("abc").when_instance::<i32, _>(|_| touched = true);
    assert!(!touched);

    let mut matched = false;
    Optional::of("abc").when_instance_run::<&str, _>(|| matched = true);
    assert!(matched);

    let mut matched = false;
    Optional::of("abc").when_instance_run::<i32, _>(|| matched = true);
    assert!(!matched);
}

// =============================================================================
// Bridge to Try
// =============================================================================

#[rstest]
fn run_catching_captures_success() {
    let parsed = Optional::of("42").run_catching(|s| s.parse::<i32>());
    assert_eq!(parsed.ok(), Some(42));
}

#[rstest]
fn run_catching_captures_the_parse_error() {
    let failed = Optional::of("N/A").run_catching(|s| s.parse::<i32>());
    assert!(failed.is_failure());
    assert!(failed.err_ref().is_some_and(|c| c.is::<ParseIntError>()));
}

#[rstest]
fn run_catching_on_empty_fails_without_invoking_the_mapper() {
    let failed = Optional::<&str>::empty()
        .run_catching(|_| -> Result<i32, ParseIntError> { panic!("mapper invoked on empty") });
    let caught = failed.err().expect("expected a failure");
    assert!(caught.is::<EmptyOptionalError>());
    assert_eq!(caught.message(), "Optional is empty");
}

#[rstest]
fn run_catching_captures_a_panic() {
    let failed = Optional::of(1).run_catching(|_| -> Result<i32, ParseIntError> {
        panic!("boom");
    });
    let caught = failed.err().expect("expected a failure");
    assert!(caught.is_panic());
    assert_eq!(caught.message(), "boom");
}

// =============================================================================
// Conversions, Equality and Formatting
// =============================================================================

#[rstest]
fn native_option_conversions() {
    assert_eq!(Optional::of("x").into_option(), Some("x"));
    assert_eq!(Optional::<&str>::empty().into_option(), None);

    let from_native: Optional<i32> = Some(1).into();
    assert_eq!(from_native, Optional::of(1));

    let back: Option<i32> = Optional::of(1).into();
    assert_eq!(back, Some(1));
}

#[rstest]
fn equality_over_presence_and_payload() {
    assert_eq!(Optional::of(1), Optional::of(1));
    assert_ne!(Optional::of(1), Optional::of(2));
    assert_ne!(Optional::of(1), Optional::empty());
    assert_eq!(Optional::<i32>::empty(), Optional::empty());
}

#[rstest]
fn display_distinguishes_presence() {
    assert_eq!(Optional::of(3).to_string(), "Optional[3]");
    assert_eq!(Optional::<i32>::empty().to_string(), "Optional.empty");

    assert_eq!(format!("{:?}", Optional::of("v")), "Optional[\"v\"]");
    assert_eq!(format!("{:?}", Optional::<&str>::empty()), "Optional.empty");
}
