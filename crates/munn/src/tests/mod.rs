//! End-to-end tests for the command line front end
//!
//! Each test parses real arguments, runs against a portfolio file on disk,
//! and inspects what would have been printed.

use std::io::Write;

use clap::Parser;
use jiff::civil::date;
use munn_core::model::ProjectionRecord;
use tempfile::NamedTempFile;

use crate::{Args, run};

const EXAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/example.munn");

const WEEKLY_GROCERIES: &str = r#"
accounts:
  - id: 1
    name: Checking
manual_adjustments:
  - account: 1
    date: "2024-01-01"
    balance: 1000.0
transactions:
  - from: 1
    description: Groceries
    amount: 50.0
    schedule: Weekly(Monday)
    start: "2024-01-01"
"#;

fn portfolio_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

fn run_lines(argv: &[&str]) -> Vec<String> {
    let args = Args::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    run(&args, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn year_of(line: &str) -> i32 {
    line.split('-').next().and_then(|y| y.parse().ok()).unwrap()
}

/// Test the bundled example runs and ends with the summary lines
#[test]
fn test_example_runs() {
    let lines = run_lines(&["munn", EXAMPLE]);

    assert!(lines.len() > 3);
    assert!(lines[0].starts_with("2024-01-01\tChecking\t"));
    assert!(lines[1].starts_with("2024-01-01\tSavings\t"));
    assert!(lines[2].starts_with("2024-01-01\tBrokerage\t"));

    let n = lines.len();
    assert!(lines[n - 2].starts_with("Final balance: $"));
    assert!(lines[n - 1].starts_with("Retirement date: "));
}

/// Test the year count includes the last day of the window
#[test]
fn test_example_years() {
    let lines = run_lines(&["munn", EXAMPLE, "--years", "100"]);

    // The last two lines are the summary
    let last_record = &lines[lines.len() - 3];
    assert_eq!(year_of(&lines[0]), 2024);
    assert_eq!(year_of(last_record) - year_of(&lines[0]), 100);
}

/// Test the stats block comes first
#[test]
fn test_example_stats() {
    let lines = run_lines(&["munn", EXAMPLE, "--stats", "--years", "1"]);

    assert!(lines[0].starts_with("Average monthly expenses:  $"));
    assert!(lines[1].starts_with("Average monthly income:    $"));
    assert!(lines[2].starts_with("Average monthly growth:    $"));
    assert!(lines[3].starts_with("2024-01-01\t"));
}

/// Test the date-range form prints exact records and the final total
#[test]
fn test_date_range_output() {
    let file = portfolio_file(WEEKLY_GROCERIES);
    let path = file.path().to_str().unwrap();

    let lines = run_lines(&["munn", path, "--from", "2024-01-01", "--to", "2024-01-15"]);

    assert_eq!(
        lines,
        vec![
            "2024-01-01\tChecking\t950.00",
            "2024-01-08\tChecking\t900.00",
            "Final balance: $900.00",
        ]
    );
}

/// Test a year count running past the last representable date stops there
#[test]
fn test_years_past_end_of_calendar() {
    let file = portfolio_file(WEEKLY_GROCERIES);
    let path = file.path().to_str().unwrap();

    let lines = run_lines(&["munn", path, "--from", "9999-12-01", "-y", "5"]);

    // 9999-12-31 is a Friday, so the Mondays are the 6th through the 27th
    assert_eq!(
        lines,
        vec![
            "9999-12-01\tChecking\t1000.00",
            "9999-12-06\tChecking\t950.00",
            "9999-12-13\tChecking\t900.00",
            "9999-12-20\tChecking\t850.00",
            "9999-12-27\tChecking\t800.00",
            "Final balance: $800.00",
        ]
    );
}

/// Test `--to` alone starts at the earliest manual adjustment
#[test]
fn test_to_defaults_from_to_earliest_adjustment() {
    let file = portfolio_file(WEEKLY_GROCERIES);
    let path = file.path().to_str().unwrap();

    let lines = run_lines(&["munn", path, "--to", "2024-01-02"]);

    assert_eq!(
        lines,
        vec!["2024-01-01\tChecking\t950.00", "Final balance: $950.00"]
    );
}

/// Test debug narration does not change what is printed
#[test]
fn test_debug_output_matches_quiet_run() {
    let file = portfolio_file(WEEKLY_GROCERIES);
    let path = file.path().to_str().unwrap();

    let quiet = run_lines(&["munn", path, "-y", "1"]);
    let debug = run_lines(&["munn", path, "-y", "1", "--debug"]);
    assert_eq!(quiet, debug);
}

/// Test JSON output parses back into records
#[test]
fn test_json_output() {
    let file = portfolio_file(WEEKLY_GROCERIES);
    let path = file.path().to_str().unwrap();

    let args =
        Args::try_parse_from(["munn", path, "--json", "--from", "2024-01-01", "--to", "2024-01-15"])
            .unwrap();
    let mut out = Vec::new();
    run(&args, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let (json, summary) = text.split_at(text.find("Final balance").unwrap());
    let records: Vec<ProjectionRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].date, date(2024, 1, 8));
    assert_eq!(records[1].balance, 900.0);
    assert_eq!(summary, "Final balance: $900.00\n");
}

/// Test the retirement flag supplies a plan and reports its date
#[test]
fn test_retire_flag() {
    let file = portfolio_file(
        r#"
accounts:
  - id: 1
    name: Checking
manual_adjustments:
  - account: 1
    date: "2025-01-01"
    balance: 45000.0
retirement:
  death_date: "2090-01-01"
  yearly_expenses: 1000000.0
"#,
    );
    let path = file.path().to_str().unwrap();

    let lines = run_lines(&["munn", path, "--to", "2025-02-01", "-r", "2030-01-01:10000"]);

    assert_eq!(
        lines,
        vec![
            "2025-01-01\tChecking\t45000.00",
            "Final balance: $45000.00",
            "Retirement date: 2025-01-02",
        ]
    );
}

/// Test load failures surface as errors
#[test]
fn test_load_errors() {
    let args = Args::try_parse_from(["munn", "/definitely/not/here.munn"]).unwrap();
    assert!(run(&args, &mut Vec::new()).is_err());

    let file = portfolio_file(
        r#"
accounts:
  - id: 1
    name: Checking
transactions:
  - to: 1
    description: Pay
    amount: 1.0
    schedule: Hourly
"#,
    );
    let args = Args::try_parse_from(["munn", file.path().to_str().unwrap()]).unwrap();
    let err = run(&args, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("unknown schedule kind: Hourly"));
}
