//! Harness configuration: color handling and report format.

use std::io::Write;

use clap::ValueEnum;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Output format for a rendered [`RunReport`](crate::RunReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// The human-readable text layout.
    #[default]
    Text,
    /// The report serialized as pretty-printed JSON.
    Json,
}

/// When to emit terminal color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn use_colors(&self) -> bool {
        match self {
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Configuration for running and reporting a suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub use_colors: bool,
    pub format: ReportFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            use_colors: ColorMode::Auto.use_colors(),
            format: ReportFormat::Text,
        }
    }
}

impl HarnessConfig {
    /// Text output without color escapes, independent of the terminal.
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            format: ReportFormat::Text,
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_color_mode(self, mode: ColorMode) -> Self {
        self.with_colors(mode.use_colors())
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: Color) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let mut ansi = Ansi::new(Vec::with_capacity(text.len() + 10));
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_reset(false);
        // Writes into a Vec cannot fail.
        let _ = ansi.set_color(&spec);
        let _ = ansi.write_all(text.as_bytes());
        let _ = ansi.reset();
        String::from_utf8_lossy(&ansi.into_inner()).into_owned()
    }
}
