//! End-to-end builder tests against generated .xlsx fixtures.

mod common;

use pretty_assertions::assert_eq;
use sheetboard::{builder, BoardError};
use std::fs;
use tempfile::TempDir;

#[test]
fn build_end_to_end() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.xlsx");
    let dist = temp.path().join("dist");
    common::write_fixture(&input);

    let artifacts = builder::build(&input, &dist).unwrap();

    let html = fs::read_to_string(&artifacts.html_path).unwrap();
    assert!(html.contains("$1,000,000"), "total revenue formatted");
    assert!(html.contains("15%"), "growth rate formatted");
    assert!(html.contains("$45,000.50"), "pending stock value formatted");
    assert!(html.contains("1,234,567"), "qty sold has separators");
    assert!(html.contains("Jan 01, 2025"), "last updated date");
    assert!(html.contains("Profit"), "profit status shown");

    // Workbook copy is byte-identical to the input
    let copied = fs::read(&artifacts.workbook_copy).unwrap();
    let original = fs::read(&input).unwrap();
    assert_eq!(copied, original);

    assert!(dist.join("index.html").exists());
    assert!(dist.join("Business-Summary-Latest.xlsx").exists());
}

#[test]
fn build_renders_charts_and_tables() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.xlsx");
    let dist = temp.path().join("dist");
    common::write_fixture(&input);

    let artifacts = builder::build(&input, &dist).unwrap();
    let html = fs::read_to_string(&artifacts.html_path).unwrap();

    assert!(html.contains("Plotly.newPlot('chart-monthly'"));
    assert!(html.contains("Plotly.newPlot('chart-profit'"));
    assert!(html.contains("Plotly.newPlot('chart-cat-qty'"));
    assert!(html.contains("Plotly.newPlot('chart-pending-val'"));

    // Partner tables show only name plus the last two (currency) columns
    assert!(html.contains("Partner Contributions"));
    assert!(html.contains("Cash Pool Summary"));
    assert!(html.contains("Balance ($)"));
    assert!(!html.contains("Invested ($)"), "working columns are dropped");

    // Monthly chart payload carries the data from the sheet
    assert!(html.contains("\"Jan\""));
    assert!(html.contains("10000.0") || html.contains("10000"));
}

#[test]
fn build_twice_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.xlsx");
    let dist = temp.path().join("dist");
    common::write_fixture(&input);

    builder::build(&input, &dist).unwrap();
    let first_html = fs::read(dist.join("index.html")).unwrap();
    let first_copy = fs::read(dist.join("Business-Summary-Latest.xlsx")).unwrap();

    builder::build(&input, &dist).unwrap();
    let second_html = fs::read(dist.join("index.html")).unwrap();
    let second_copy = fs::read(dist.join("Business-Summary-Latest.xlsx")).unwrap();

    assert_eq!(first_html, second_html);
    assert_eq!(first_copy, second_copy);
}

#[test]
fn missing_input_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("nope.xlsx");
    let dist = temp.path().join("dist");

    let err = builder::build(&input, &dist).unwrap_err();
    assert!(matches!(err, BoardError::MissingInput(_)));
    assert!(!dist.exists(), "no output on failure");
}

#[test]
fn missing_dashboard_sheet_produces_no_output() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.xlsx");
    let dist = temp.path().join("dist");
    common::write_fixture_missing_dashboard(&input);

    let err = builder::build(&input, &dist).unwrap_err();
    match err {
        BoardError::MissingSheet(name) => assert_eq!(name, "Dashboard"),
        other => panic!("expected MissingSheet, got {other:?}"),
    }
    assert!(!dist.exists(), "no output on failure");
}

#[test]
fn non_numeric_kpi_cell_aborts_before_writing() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.xlsx");
    let dist = temp.path().join("dist");
    common::write_fixture_bad_kpi(&input);

    let err = builder::build(&input, &dist).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Summary!B2"), "names the offending cell: {message}");
    assert!(message.contains("expected a number"));
    assert!(!dist.join("index.html").exists(), "HTML not written on failure");
}

#[test]
fn build_overwrites_previous_output() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.xlsx");
    let dist = temp.path().join("dist");
    common::write_fixture(&input);

    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("index.html"), "stale").unwrap();

    builder::build(&input, &dist).unwrap();
    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("$1,000,000"));
}
