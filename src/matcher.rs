//! Reusable, described predicates for [`expect_that!`](crate::expect_that).
//!
//! A [`Matcher`] pairs a boolean predicate with the phrase that completes the
//! sentence `Expected "<value>" to ...`, for example `be divisible by 3`.

use std::fmt::{self, Display};

use num_traits::{CheckedRem, PrimInt};
use regex::Regex;

/// A described predicate over values of type `T`.
pub struct Matcher<'a, T: ?Sized> {
    description: String,
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized> Matcher<'a, T> {
    pub fn new(description: impl Into<String>, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The phrase that follows "to" in an expectation failure.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized> fmt::Debug for Matcher<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Matches strings beginning with `prefix`.
pub fn starts_with<'a, S>(prefix: impl Into<String>) -> Matcher<'a, S>
where
    S: AsRef<str> + ?Sized + 'a,
{
    let prefix = prefix.into();
    let description = format!("start with \"{}\"", prefix);
    Matcher::new(description, move |value: &S| {
        value.as_ref().starts_with(prefix.as_str())
    })
}

/// Matches strings ending with `suffix`.
pub fn ends_with<'a, S>(suffix: impl Into<String>) -> Matcher<'a, S>
where
    S: AsRef<str> + ?Sized + 'a,
{
    let suffix = suffix.into();
    let description = format!("end with \"{}\"", suffix);
    Matcher::new(description, move |value: &S| {
        value.as_ref().ends_with(suffix.as_str())
    })
}

/// Matches strings containing `needle`.
pub fn contains<'a, S>(needle: impl Into<String>) -> Matcher<'a, S>
where
    S: AsRef<str> + ?Sized + 'a,
{
    let needle = needle.into();
    let description = format!("contain \"{}\"", needle);
    Matcher::new(description, move |value: &S| {
        value.as_ref().contains(needle.as_str())
    })
}

/// Matches strings in which `pattern` finds a match.
pub fn matches_pattern<'a, S>(pattern: &str) -> Result<Matcher<'a, S>, regex::Error>
where
    S: AsRef<str> + ?Sized + 'a,
{
    let regex = Regex::new(pattern)?;
    let description = format!("match /{}/", pattern);
    Ok(Matcher::new(description, move |value: &S| {
        regex.is_match(value.as_ref())
    }))
}

/// Matches integers of any primitive width that are an exact multiple of
/// `divisor`. Nothing is divisible by zero.
pub fn divisible_by<'a, T>(divisor: T) -> Matcher<'a, T>
where
    T: PrimInt + CheckedRem + Display + 'a,
{
    Matcher::new(format!("be divisible by {}", divisor), move |value: &T| {
        // `MIN % -1` overflows; the quotient exists, so it divides evenly.
        !divisor.is_zero() && value.checked_rem(&divisor).map_or(true, |rem| rem.is_zero())
    })
}

pub fn greater_than<'a, T>(bound: T) -> Matcher<'a, T>
where
    T: PartialOrd + Display + 'a,
{
    let description = format!("be greater than {}", bound);
    Matcher::new(description, move |value: &T| *value > bound)
}

pub fn less_than<'a, T>(bound: T) -> Matcher<'a, T>
where
    T: PartialOrd + Display + 'a,
{
    let description = format!("be less than {}", bound);
    Matcher::new(description, move |value: &T| *value < bound)
}

pub fn equal_to<'a, T>(expected: T) -> Matcher<'a, T>
where
    T: PartialEq + Display + 'a,
{
    let description = format!("equal {}", expected);
    Matcher::new(description, move |value: &T| *value == expected)
}

/// Wraps an arbitrary predicate with a caller-supplied description.
pub fn satisfies<'a, T, F>(description: impl Into<String>, predicate: F) -> Matcher<'a, T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + 'a,
{
    Matcher::new(description, predicate)
}
