//! End-to-end runs over small registries: report layout, ordering, isolation,
//! fatal truncation, and count invariants.

use std::cell::Cell;
use std::rc::Rc;

use trialrun::{
    check, check_eq, check_fatal, divisible_by, expect_that, FailureKind, HarnessConfig,
    OutputBuffer, Outcome, Registry, ReportFormat, RunReport, Runner, TestCase,
};

fn plain_runner() -> Runner {
    Runner::new(HarnessConfig::plain())
}

fn render(registry: &Registry) -> (RunReport, String) {
    let mut buffer = OutputBuffer::new();
    let report = plain_runner()
        .run_to(registry, &mut buffer)
        .expect("writing to a buffer cannot fail");
    (report, buffer.buffer)
}

fn assert_counts_hold(report: &RunReport) {
    assert_eq!(report.passed + report.failed, report.executed());
    assert!(report.executed() <= report.total);
    if report.aborted {
        assert_eq!(report.skipped, report.total - report.executed());
    } else {
        assert_eq!(report.skipped, 0);
        assert_eq!(report.executed(), report.total);
    }
}

#[test]
fn two_passing_cases_render_exactly() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("A", || Ok(())));
    registry.register(TestCase::new("B", || Ok(())));

    let (report, text) = render(&registry);
    assert_eq!(
        text,
        "Running 2 tests\ntest A ... PASSED\ntest B ... PASSED\n\ntest result:PASSED. 2 passed; 0 failed;\n"
    );
    assert_counts_hold(&report);
}

#[test]
fn single_case_uses_singular_noun() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("only", || Ok(())));
    let (_, text) = render(&registry);
    assert!(text.starts_with("Running 1 test\n"));
}

#[test]
fn empty_registry_reports_zero() {
    let (report, text) = render(&Registry::new());
    assert_eq!(
        text,
        "Running 0 tests\n\ntest result:PASSED. 0 passed; 0 failed;\n"
    );
    assert_counts_hold(&report);
}

#[test]
fn equality_failure_is_reported_with_values() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("W", || Ok(())));
    registry.register(TestCase::new("X", || {
        check_eq!(1, 2);
        Ok(())
    }));

    let (report, text) = render(&registry);
    assert!(text.contains("test X ... FAILED\n"));
    assert!(text.contains("\nfailures:\n-----X----\nX panicked at tests/runner_scenarios.rs:"));
    assert!(text.contains("Assertion failed\nExpected: 2\nActual: 1\n\n"));
    assert!(text.ends_with("test result:FAILED. 1 passed; 1 failed;\n"));
    assert_eq!(report.failures[0].kind(), FailureKind::Equality);
    assert_counts_hold(&report);
}

#[test]
fn fatal_failure_skips_remaining_cases() {
    let z_ran = Rc::new(Cell::new(false));
    let z_flag = Rc::clone(&z_ran);

    let mut registry = Registry::new();
    registry.register(TestCase::new("Y", || {
        check_fatal!(false);
        Ok(())
    }));
    registry.register(TestCase::new("Z", move || {
        z_flag.set(true);
        Ok(())
    }));

    let (report, text) = render(&registry);
    assert!(!z_ran.get());
    assert!(report.aborted);
    assert_eq!(report.executed(), 1);
    assert_eq!(report.skipped, 1);
    assert!(text.contains("test Y ... FAILED\nEncountered a fatal error, aborted the remaining 1 test\n"));
    assert!(!text.contains("test Z"));
    assert!(text.contains("failures:\nFATAL ERROR\n-----Y----\n"));
    assert!(text.ends_with("test result:FAILED. 0 passed; 1 failed;\n"));
    assert_counts_hold(&report);
}

#[test]
fn fatal_truncation_in_the_middle() {
    let executed = Rc::new(Cell::new(0usize));
    let mut registry = Registry::new();
    for index in 0..6 {
        let executed = Rc::clone(&executed);
        registry.register(TestCase::new(format!("case{}", index), move || {
            executed.set(executed.get() + 1);
            check_fatal!(index != 2);
            Ok(())
        }));
    }

    let report = plain_runner().run(&registry);
    assert_eq!(executed.get(), 3);
    assert_eq!(report.executed(), 3);
    assert_eq!(report.skipped, 3);
    let text = trialrun::report::render_text(&report, &HarnessConfig::plain());
    assert!(text.contains("aborted the remaining 3 tests\n"));
    assert_counts_hold(&report);
}

#[test]
fn expectation_failure_message() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("W", || {
        expect_that!(5, divisible_by(3));
        Ok(())
    }));

    let report = plain_runner().run(&registry);
    assert_eq!(
        report.failures[0].message(),
        "Expected \"5\" to be divisible by 3"
    );
    assert_eq!(report.failures[0].kind(), FailureKind::Expectation);
}

#[test]
fn report_lines_follow_registration_order() {
    let names = ["zeta", "alpha", "mu", "beta"];
    let mut registry = Registry::new();
    for name in names {
        registry.register(TestCase::new(name, || Ok(())));
    }

    let (_, text) = render(&registry);
    let listed: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("test ")?.split_once(" ... "))
        .map(|(name, _)| name)
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn non_fatal_failure_does_not_affect_siblings() {
    fn passing() -> Outcome {
        check!(true);
        Ok(())
    }

    let mut alone = Registry::new();
    alone.register(TestCase::new("p1", passing));
    alone.register(TestCase::new("p2", passing));

    let mut mixed = Registry::new();
    mixed.register(TestCase::new("p1", passing));
    mixed.register(TestCase::new("broken", || {
        check!(1 + 1 == 3);
        Ok(())
    }));
    mixed.register(TestCase::new("p2", passing));

    let alone_report = plain_runner().run(&alone);
    let mixed_report = plain_runner().run(&mixed);

    assert_eq!(alone_report.passed, 2);
    assert_eq!(mixed_report.passed, 2);
    assert_eq!(mixed_report.failed, 1);
    assert!(!mixed_report.aborted);
    assert!(mixed_report.cases[0].status.is_passed());
    assert!(!mixed_report.cases[1].status.is_passed());
    assert!(mixed_report.cases[2].status.is_passed());
    assert_counts_hold(&mixed_report);
}

#[test]
fn failures_listed_in_occurrence_order() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("first", || {
        check!(false);
        Ok(())
    }));
    registry.register(TestCase::new("second", || {
        check_eq!("a", "b");
        Ok(())
    }));

    let (_, text) = render(&registry);
    let first = text.find("-----first----").expect("first diagnostic");
    let second = text.find("-----second----").expect("second diagnostic");
    assert!(first < second);
    assert!(text.contains("assertion false failed\n\n-----second----"));
}

#[test]
fn repeated_runs_are_identical() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("ok", || Ok(())));
    registry.register(TestCase::new("bad", || {
        check_eq!(10, 20);
        Ok(())
    }));

    let (first_report, first_text) = render(&registry);
    let (second_report, second_text) = render(&registry);
    assert_eq!(first_text, second_text);
    assert_eq!(first_report, second_report);
}

#[test]
fn json_format_emits_report() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("ok", || Ok(())));

    let runner = Runner::new(HarnessConfig::plain().with_format(ReportFormat::Json));
    let mut buffer = OutputBuffer::new();
    let report = runner.run_to(&registry, &mut buffer).unwrap();

    let value: serde_json::Value = serde_json::from_str(buffer.as_str()).unwrap();
    assert_eq!(value["passed"], report.passed);
    assert_eq!(value["cases"][0]["name"], "ok");
    assert_eq!(value["aborted"], false);
}

#[test]
#[should_panic(expected = "not a recognized failure")]
fn panics_propagate_out_of_the_runner() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("explodes", || {
        panic!("not a recognized failure");
    }));
    plain_runner().run(&registry);
}
