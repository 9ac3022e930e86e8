use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the harness itself, outside of any test case.
///
/// Assertion failures are not represented here; they are [`Failure`](crate::Failure)
/// values and never escape the runner.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("failed to write test report")]
    #[diagnostic(
        code(trialrun::output),
        help("the report sink was closed or is not writable")
    )]
    Output(#[from] std::io::Error),

    #[error("failed to serialize test report")]
    #[diagnostic(code(trialrun::serialize))]
    Serialize(#[from] serde_json::Error),
}
