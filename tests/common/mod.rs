//! Shared .xlsx fixtures matching the layout constants in src/config.rs.

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn fill_summary(sheet: &mut Worksheet) {
    // KPIs (0-based coordinates; B2 is row 1, col 1)
    sheet.write_number(1, 1, 1_000_000.0).unwrap(); // B2 total revenue
    sheet.write_number(2, 1, 750_000.0).unwrap(); // B3 total purchases
    sheet.write_number(3, 1, 900_000.0).unwrap(); // B4 total sales
    sheet.write_number(5, 1, 150_000.0).unwrap(); // B6 profit/loss
    sheet.write_string(6, 1, "Profit").unwrap(); // B7 status

    // Contribution summary: header row 17, data 18-20, cols A-G
    let contrib_headers = [
        "Partner",
        "Invested ($)",
        "Recovered ($)",
        "Excess ($)",
        "Target ($)",
        "Paid ($)",
        "Balance ($)",
    ];
    for (col, header) in contrib_headers.iter().enumerate() {
        sheet.write_string(16, col as u16, *header).unwrap();
    }
    for (i, partner) in ["Asha", "Ravi", "Meera"].iter().enumerate() {
        let row = 17 + i as u32;
        sheet.write_string(row, 0, *partner).unwrap();
        for col in 1..7u16 {
            sheet
                .write_number(row, col, 1_000.0 * (i as f64 + 1.0) + col as f64)
                .unwrap();
        }
    }

    // Cash pool summary: header row 25, data 26-28, cols A-F
    let cash_headers = [
        "Partner",
        "Opening ($)",
        "Inflow ($)",
        "Outflow ($)",
        "Collected ($)",
        "Transferred ($)",
    ];
    for (col, header) in cash_headers.iter().enumerate() {
        sheet.write_string(24, col as u16, *header).unwrap();
    }
    for (i, partner) in ["Asha", "Ravi", "Meera"].iter().enumerate() {
        let row = 25 + i as u32;
        sheet.write_string(row, 0, *partner).unwrap();
        for col in 1..6u16 {
            sheet
                .write_number(row, col, 500.0 * (i as f64 + 1.0) + col as f64)
                .unwrap();
        }
    }
}

fn fill_dashboard(sheet: &mut Worksheet) {
    // KPIs
    sheet.write_number(2, 1, 45658.0).unwrap(); // B3 last updated (Jan 01, 2025)
    sheet.write_number(4, 2, 0.15).unwrap(); // C5 growth rate
    sheet.write_number(5, 4, 45_000.5).unwrap(); // E6 pending stock value
    sheet.write_number(9, 6, 1_234_567.0).unwrap(); // G10 qty sold
    sheet.write_number(10, 6, 42.0).unwrap(); // G11 qty pending

    // Monthly table: header row 9, data 10-21, cols A-D
    let monthly_headers = ["Month", "Purchases ($)", "Sales ($)", "Profit ($)"];
    for (col, header) in monthly_headers.iter().enumerate() {
        sheet.write_string(8, col as u16, *header).unwrap();
    }
    for (i, month) in MONTHS.iter().enumerate() {
        let row = 9 + i as u32;
        let purchases = 10_000.0 + 100.0 * i as f64;
        let sales = 12_000.0 + 120.0 * i as f64;
        sheet.write_string(row, 0, *month).unwrap();
        sheet.write_number(row, 1, purchases).unwrap();
        sheet.write_number(row, 2, sales).unwrap();
        sheet.write_number(row, 3, sales - purchases).unwrap();
    }

    // Category quantities: header row 46, data 47-49, cols F-H
    let catqty_headers = ["Category", "Qty Sold", "Qty Pending"];
    for (i, header) in catqty_headers.iter().enumerate() {
        sheet.write_string(45, 5 + i as u16, *header).unwrap();
    }
    for (i, category) in ["Sarees", "Suits", "Dupattas"].iter().enumerate() {
        let row = 46 + i as u32;
        sheet.write_string(row, 5, *category).unwrap();
        sheet.write_number(row, 6, 30.0 + i as f64).unwrap();
        sheet.write_number(row, 7, 5.0 + i as f64).unwrap();
    }

    // Pending value by category: header row 46, data 47-49, cols J-K
    sheet.write_string(45, 9, "Category").unwrap();
    sheet.write_string(45, 10, "Pending Value ($)").unwrap();
    for (i, category) in ["Sarees", "Suits", "Dupattas"].iter().enumerate() {
        let row = 46 + i as u32;
        sheet.write_string(row, 9, *category).unwrap();
        sheet.write_number(row, 10, 2_000.0 * (i as f64 + 1.0)).unwrap();
    }
}

/// A well-formed workbook matching every configured coordinate.
pub fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    fill_summary(workbook.add_worksheet().set_name("Summary").unwrap());
    fill_dashboard(workbook.add_worksheet().set_name("Dashboard").unwrap());
    workbook.save(path).unwrap();
}

/// Valid Summary sheet but no Dashboard sheet at all.
pub fn write_fixture_missing_dashboard(path: &Path) {
    let mut workbook = Workbook::new();
    fill_summary(workbook.add_worksheet().set_name("Summary").unwrap());
    workbook.save(path).unwrap();
}

/// Well-formed except the total revenue KPI holds text.
pub fn write_fixture_bad_kpi(path: &Path) {
    let mut workbook = Workbook::new();
    let summary = workbook.add_worksheet().set_name("Summary").unwrap();
    fill_summary(summary);
    summary.write_string(1, 1, "n/a").unwrap(); // overwrite B2
    fill_dashboard(workbook.add_worksheet().set_name("Dashboard").unwrap());
    workbook.save(path).unwrap();
}
