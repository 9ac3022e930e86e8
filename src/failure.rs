//! The failure value raised by assertions.
//!
//! A [`Failure`] is created exactly once per failed check and travels out of
//! the test body as the `Err` side of its [`Outcome`](crate::Outcome). The
//! runner is the only place that catches it.

use std::fmt;

use miette::Diagnostic;
use serde::Serialize;
use termcolor::Color;
use thiserror::Error;

use crate::config::HarnessConfig;

/// Classification of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A boolean condition evaluated to false.
    Plain,
    /// Two displayable values compared unequal.
    Equality,
    /// A value did not satisfy a [`Matcher`](crate::Matcher).
    Expectation,
}

impl FailureKind {
    /// Diagnostic code reported through `miette`.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Plain => "trialrun::assertion",
            FailureKind::Equality => "trialrun::equality",
            FailureKind::Expectation => "trialrun::expectation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Plain => "plain",
            FailureKind::Equality => "equality",
            FailureKind::Expectation => "expectation",
        };
        write!(f, "{}", name)
    }
}

/// Source position of an assertion, captured by [`location!`](crate::location).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Immutable record describing one failed check.
///
/// Assertions build failures without knowing which test case is running; the
/// runner attributes each caught failure to its case with
/// [`Failure::attributed_to`], which produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Failure {
    kind: FailureKind,
    message: String,
    test_name: Option<String>,
    file: &'static str,
    line: u32,
    fatal: bool,
}

const UNATTRIBUTED: &str = "<unattributed>";

impl Failure {
    pub fn new(
        kind: FailureKind,
        message: impl Into<String>,
        location: Location,
        fatal: bool,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            test_name: None,
            file: location.file,
            line: location.line,
            fatal,
        }
    }

    /// Returns a copy of this failure attributed to the named test case.
    pub fn attributed_to(self, test_name: &str) -> Self {
        Self {
            test_name: Some(test_name.to_string()),
            ..self
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the test case that raised this failure, once the runner has
    /// attributed it.
    pub fn test_name(&self) -> Option<&str> {
        self.test_name.as_deref()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn location(&self) -> Location {
        Location::new(self.file, self.line)
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Renders the diagnostic block shown in the report's `failures:` section.
    pub fn render(&self, config: &HarnessConfig) -> String {
        let name = self.test_name().unwrap_or(UNATTRIBUTED);
        let mut text = String::new();
        if self.fatal {
            text.push_str(&config.colorize("FATAL ERROR", Color::Red));
            text.push('\n');
        }
        text.push_str(&format!("-----{}----\n", name));
        text.push_str(&format!("{} panicked at {}\n", name, self.location()));
        text.push_str(&self.message);
        text.push('\n');
        text
    }
}

impl Diagnostic for Failure {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()) as Box<dyn fmt::Display + 'a>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.fatal {
            Some(Box::new("fatal failures abort every remaining test case in the run")
                as Box<dyn fmt::Display + 'a>)
        } else {
            None
        }
    }
}
