//! The assertion engine.
//!
//! Each function evaluates one check and returns `Err(Failure)` when it does
//! not hold. Test bodies normally go through the macros below, which capture
//! the source location and expression text and apply `?`:
//!
//! - **`check!(cond)`**: plain boolean assertion.
//! - **`check_fatal!(cond)`**: like `check!`, but a failure aborts the rest of the run.
//! - **`check_eq!(actual, expected)`**: dumps both values when both implement `Display`.
//! - **`check_ne!(actual, expected)`**: plain boolean semantics, never dumps values.
//! - **`expect_that!(value, matcher)`**: checks a value against a [`Matcher`].
//!
//! ```
//! use trialrun::{check, check_eq, expect_that, divisible_by, Outcome};
//!
//! fn arithmetic() -> Outcome {
//!     check!(1 + 1 == 2);
//!     check_eq!(6 * 7, 42);
//!     expect_that!(42, divisible_by(7));
//!     Ok(())
//! }
//! assert!(arithmetic().is_ok());
//! ```

use crate::case::Outcome;
use crate::failure::{Failure, FailureKind, Location};
use crate::matcher::Matcher;

pub fn assert_bool(condition: bool, is_fatal: bool, location: Location, expr_text: &str) -> Outcome {
    if condition {
        return Ok(());
    }
    Err(Failure::new(
        FailureKind::Plain,
        format!("assertion {} failed", expr_text),
        location,
        is_fatal,
    ))
}

pub fn fatal_assert(condition: bool, location: Location, expr_text: &str) -> Outcome {
    assert_bool(condition, true, location, expr_text)
}

/// Compares `actual` against `expected`.
///
/// `render` is only called on a mismatch and returns the textual forms of
/// `(actual, expected)`. When either side has none, the failure degrades to
/// the plain `assertion <expr_text> failed` message.
pub fn assert_equal<A, B>(
    actual: &A,
    expected: &B,
    render: impl FnOnce() -> (Option<String>, Option<String>),
    location: Location,
    expr_text: &str,
) -> Outcome
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    if *actual == *expected {
        return Ok(());
    }
    match render() {
        (Some(actual), Some(expected)) => Err(Failure::new(
            FailureKind::Equality,
            format!("Assertion failed\nExpected: {}\nActual: {}", expected, actual),
            location,
            false,
        )),
        _ => assert_bool(false, false, location, expr_text),
    }
}

/// Inequality check. Unlike [`assert_equal`] this never dumps the operands.
pub fn assert_not_equal<A, B>(actual: &A, expected: &B, location: Location, expr_text: &str) -> Outcome
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    assert_bool(*actual != *expected, false, location, expr_text)
}

/// Checks `value` against `matcher`.
///
/// The failure names the value by its textual form, or by `(<expr_text>)`
/// when `render` has none.
pub fn expect<T: ?Sized>(
    value: &T,
    matcher: &Matcher<'_, T>,
    render: impl FnOnce() -> Option<String>,
    location: Location,
    expr_text: &str,
) -> Outcome {
    if matcher.matches(value) {
        return Ok(());
    }
    let subject = render().unwrap_or_else(|| format!("({})", expr_text));
    Err(Failure::new(
        FailureKind::Expectation,
        format!("Expected \"{}\" to {}", subject, matcher.description()),
        location,
        false,
    ))
}

/// Captures the current source position as a [`Location`].
#[macro_export]
macro_rules! location {
    () => {
        $crate::failure::Location::new(file!(), line!())
    };
}

#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::assertion::assert_bool($cond, false, $crate::location!(), stringify!($cond))?
    };
}

#[macro_export]
macro_rules! check_fatal {
    ($cond:expr $(,)?) => {
        $crate::assertion::fatal_assert($cond, $crate::location!(), stringify!($cond))?
    };
}

#[macro_export]
macro_rules! check_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        match (&$actual, &$expected) {
            (actual, expected) => $crate::assertion::assert_equal(
                actual,
                expected,
                || ($crate::__render!(actual), $crate::__render!(expected)),
                $crate::location!(),
                concat!(stringify!($actual), " == ", stringify!($expected)),
            )?,
        }
    };
}

#[macro_export]
macro_rules! check_ne {
    ($actual:expr, $expected:expr $(,)?) => {
        match (&$actual, &$expected) {
            (actual, expected) => $crate::assertion::assert_not_equal(
                actual,
                expected,
                $crate::location!(),
                concat!(stringify!($actual), " != ", stringify!($expected)),
            )?,
        }
    };
}

#[macro_export]
macro_rules! expect_that {
    ($value:expr, $matcher:expr $(,)?) => {
        match (&$value, &$matcher) {
            (value, matcher) => $crate::assertion::expect(
                value,
                matcher,
                || $crate::__render!(value),
                $crate::location!(),
                stringify!($value),
            )?,
        }
    };
}
