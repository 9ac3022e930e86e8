//! Sequential execution of registered test cases.
//!
//! The runner visits cases in registration order. Each body runs to
//! completion or to its first failure; the `Err(Failure)` it returns is the
//! only signal the runner recovers from. A panic inside a body is not caught
//! and propagates out of [`Runner::run`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{HarnessConfig, ReportFormat};
use crate::error::HarnessError;
use crate::failure::Failure;
use crate::registry::Registry;
use crate::report::{self, OutputSink};

/// Terminal state of one executed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    Failed,
    /// Failed with a fatal failure; the run stopped after this case.
    FailedFatal,
}

impl CaseStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseStatus::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub name: String,
    pub status: CaseStatus,
}

/// Aggregated outcome of one run. Built fresh by every call to
/// [`Runner::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub aborted: bool,
    /// Cases never started because a fatal failure stopped the run.
    pub skipped: usize,
    /// Executed cases in execution order.
    pub cases: Vec<CaseRecord>,
    /// Failures in the order they occurred, one per failed case.
    pub failures: Vec<Failure>,
}

impl RunReport {
    fn new(total: usize) -> Self {
        Self {
            total,
            passed: 0,
            failed: 0,
            aborted: false,
            skipped: 0,
            cases: Vec::with_capacity(total),
            failures: Vec::new(),
        }
    }

    pub fn executed(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Diagnostic text for each failure, in occurrence order.
    pub fn failure_texts(&self, config: &HarnessConfig) -> Vec<String> {
        self.failures
            .iter()
            .map(|failure| failure.render(config))
            .collect()
    }

    fn record_pass(&mut self, name: &str) {
        self.passed += 1;
        self.cases.push(CaseRecord {
            name: name.to_string(),
            status: CaseStatus::Passed,
        });
    }

    fn record_failure(&mut self, name: &str, failure: Failure) {
        let status = if failure.is_fatal() {
            CaseStatus::FailedFatal
        } else {
            CaseStatus::Failed
        };
        self.failed += 1;
        self.cases.push(CaseRecord {
            name: name.to_string(),
            status,
        });
        self.failures.push(failure);
    }
}

/// Runs a [`Registry`] and reports on it.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: HarnessConfig,
}

impl Runner {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Executes every registered case in order, stopping early only on a
    /// fatal failure.
    pub fn run(&self, registry: &Registry) -> RunReport {
        let cases = registry.snapshot();
        let total = cases.len();
        let mut report = RunReport::new(total);

        for (index, case) in cases.iter().enumerate() {
            debug!(case = case.name(), index, "executing test case");
            match case.run() {
                Ok(()) => {
                    debug!(case = case.name(), "test case passed");
                    report.record_pass(case.name());
                }
                Err(failure) => {
                    let failure = failure.attributed_to(case.name());
                    let fatal = failure.is_fatal();
                    debug!(
                        case = case.name(),
                        kind = %failure.kind(),
                        fatal,
                        "test case failed"
                    );
                    report.record_failure(case.name(), failure);
                    if fatal {
                        report.aborted = true;
                        report.skipped = total - index - 1;
                        warn!(
                            case = case.name(),
                            skipped = report.skipped,
                            "fatal failure aborted the run"
                        );
                        break;
                    }
                }
            }
        }

        report
    }

    /// Runs the registry and emits the rendered report to `sink` in the
    /// configured format.
    pub fn run_to(
        &self,
        registry: &Registry,
        sink: &mut dyn OutputSink,
    ) -> Result<RunReport, HarnessError> {
        let run_report = self.run(registry);
        let text = match self.config.format {
            ReportFormat::Text => report::render_text(&run_report, &self.config),
            ReportFormat::Json => report::render_json(&run_report)?,
        };
        sink.emit(&text)?;
        Ok(run_report)
    }
}
