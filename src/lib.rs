//! trialrun: an in-process, sequential test harness.
//!
//! Cases are registered into a [`Registry`] during start-up, then a
//! [`Runner`] executes them one at a time in registration order. Assertions
//! inside a case return a [`Failure`] through `?`, which ends that case only;
//! a fatal failure additionally skips every case not yet started.
//!
//! ```
//! use trialrun::{check_eq, HarnessConfig, Registry, Runner, TestCase};
//!
//! let mut registry = Registry::new();
//! registry.register(TestCase::new("addition", || {
//!     check_eq!(2 + 2, 4);
//!     Ok(())
//! }));
//!
//! let report = Runner::new(HarnessConfig::plain()).run(&registry);
//! assert_eq!(report.passed, 1);
//! ```

pub use crate::case::{Outcome, TestCase};
pub use crate::config::{ColorMode, HarnessConfig, ReportFormat};
pub use crate::error::HarnessError;
pub use crate::failure::{Failure, FailureKind, Location};
pub use crate::matcher::{
    contains, divisible_by, ends_with, equal_to, greater_than, less_than, matches_pattern,
    satisfies, starts_with, Matcher,
};
pub use crate::registry::Registry;
pub use crate::report::{OutputBuffer, OutputSink, StdoutSink};
pub use crate::runner::{CaseRecord, CaseStatus, RunReport, Runner};

pub mod assertion;
pub mod capability;
pub mod case;
pub mod config;
pub mod error;
pub mod failure;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod runner;
