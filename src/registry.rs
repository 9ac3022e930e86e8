//! # Test registry
//!
//! Ordered, append-only collection of [`TestCase`]s.
//!
//! Registry invariant: all registration happens in a start-up phase, before
//! the registry is handed to [`Runner::run`](crate::Runner::run). The runner
//! holds a shared borrow for the whole run, so the registry cannot change
//! while cases execute.

use crate::case::TestCase;

#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case. Names are not checked for uniqueness.
    pub fn register(&mut self, test: TestCase) {
        self.cases.push(test);
    }

    /// The registered cases, in registration order.
    pub fn snapshot(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Registers `fn() -> Outcome` items, naming each case after its function.
///
/// ```
/// use trialrun::{check, register_tests, Outcome, Registry};
///
/// fn truth() -> Outcome {
///     check!(true);
///     Ok(())
/// }
///
/// let mut registry = Registry::new();
/// register_tests!(registry; truth);
/// assert_eq!(registry.snapshot()[0].name(), "truth");
/// ```
#[macro_export]
macro_rules! register_tests {
    ($registry:expr; $($test:ident),+ $(,)?) => {{
        $(
            $registry.register($crate::TestCase::new(stringify!($test), $test));
        )+
    }};
}
