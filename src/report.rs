//! Report rendering and output sinks.
//!
//! Text layout, with `[...]` marking optional parts:
//!
//! ```text
//! Running <N> test[s]
//! test <name> ... PASSED|FAILED
//! [Encountered a fatal error, aborted the remaining <K> test[s]]
//!
//! [failures:
//! <diagnostic>
//!
//! ]test result:PASSED|FAILED. <passed> passed; <failed> failed;
//! ```

use std::io::Write;

use termcolor::Color;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::runner::RunReport;

// ============================================================================
// RENDERING
// ============================================================================

fn tests_noun(count: usize) -> &'static str {
    if count == 1 {
        "test"
    } else {
        "tests"
    }
}

fn status_token(passed: bool, config: &HarnessConfig) -> String {
    if passed {
        config.colorize("PASSED", Color::Green)
    } else {
        config.colorize("FAILED", Color::Red)
    }
}

/// Renders the full text report.
pub fn render_text(report: &RunReport, config: &HarnessConfig) -> String {
    let mut out = format!("Running {} {}\n", report.total, tests_noun(report.total));

    for case in &report.cases {
        out.push_str(&format!(
            "test {} ... {}\n",
            case.name,
            status_token(case.status.is_passed(), config)
        ));
    }

    if report.aborted {
        out.push_str(&format!(
            "Encountered a fatal error, aborted the remaining {} {}\n",
            report.skipped,
            tests_noun(report.skipped)
        ));
    }
    out.push('\n');

    if !report.failures.is_empty() {
        out.push_str("failures:\n");
        for text in report.failure_texts(config) {
            out.push_str(&text);
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "test result:{}. {} passed; {} failed;\n",
        status_token(!report.has_failures(), config),
        report.passed,
        report.failed
    ));
    out
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &RunReport) -> Result<String, HarnessError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Destination for a rendered report.
pub trait OutputSink {
    fn emit(&mut self, text: &str) -> Result<(), HarnessError>;
}

/// Collects output into a String for tests or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) -> Result<(), HarnessError> {
        self.buffer.push_str(text);
        Ok(())
    }
}

/// Writes the report verbatim to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) -> Result<(), HarnessError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}
