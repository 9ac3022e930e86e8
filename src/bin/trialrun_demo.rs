// Sample suite for the trialrun harness.
// Usage: cargo run --bin trialrun_demo -- [--color auto|always|never] [--format text|json]

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trialrun::{
    check_eq, check_ne, divisible_by, expect_that, register_tests, starts_with, ColorMode,
    HarnessConfig, Outcome, Registry, ReportFormat, Runner, StdoutSink,
};

#[derive(Debug, Parser)]
#[command(
    name = "trialrun_demo",
    version,
    about = "Runs the trialrun sample suite and prints its report."
)]
struct DemoArgs {
    /// When to color PASSED/FAILED tokens.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Report layout written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn test_case_check_eq() -> Outcome {
    let mut initial = String::from("Hello World");
    initial.push_str("world2");
    check_eq!(initial, "Hello Worldworld2");
    check_eq!(initial.chars().next(), Some('H'));
    let digits = initial.chars().filter(char::is_ascii_digit).count();
    check_eq!(digits, 1);
    Ok(())
}

fn another_test() -> Outcome {
    let values: Vec<i32> = (1..=10).collect();
    check_eq!(values.iter().sum::<i32>(), 55);
    check_ne!(2 * 2, 4);
    Ok(())
}

fn greeting_prefix() -> Outcome {
    expect_that!(String::from("Hello World"), starts_with("Hello"));
    expect_that!(15, divisible_by(3));
    Ok(())
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = DemoArgs::parse();
    let config = HarnessConfig::default()
        .with_color_mode(args.color)
        .with_format(args.format);

    let mut registry = Registry::new();
    register_tests!(registry; another_test, test_case_check_eq, greeting_prefix);

    let report = Runner::new(config).run_to(&registry, &mut StdoutSink)?;
    if report.has_failures() {
        process::exit(1);
    }
    Ok(())
}
