use std::fmt;

use crate::failure::Failure;

/// Result of running a test body. Assertions propagate their [`Failure`]
/// through `?`, so the first violation ends the body.
pub type Outcome = Result<(), Failure>;

/// A named, zero-argument unit of work.
pub struct TestCase {
    name: String,
    body: Box<dyn Fn() -> Outcome>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, body: impl Fn() -> Outcome + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the body once.
    pub fn run(&self) -> Outcome {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
