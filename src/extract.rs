//! KPI and table extraction against the fixed layout in `config`.
//!
//! Everything is read before the builder touches the filesystem, so a
//! malformed workbook aborts the run with no partial output.

use crate::config;
use crate::error::BoardResult;
use crate::excel::WorkbookReader;
use crate::format::excel_serial_to_date;
use crate::types::{DashboardData, TableData};
use calamine::Data;

pub fn extract(workbook: &mut WorkbookReader) -> BoardResult<DashboardData> {
    let summary = workbook.sheet(config::SHEET_SUMMARY)?;
    let dashboard = workbook.sheet(config::SHEET_DASHBOARD)?;

    let contributions = summary.table(
        config::CONTRIB_HEADER_ROW,
        config::CONTRIB_DATA_ROWS,
        config::CONTRIB_COLS,
    )?;
    let cash_pool = summary.table(
        config::CASH_HEADER_ROW,
        config::CASH_DATA_ROWS,
        config::CASH_COLS,
    )?;

    Ok(DashboardData {
        total_revenue: summary.number(config::CELL_TOTAL_REVENUE)?,
        total_purchases: summary.number(config::CELL_TOTAL_PURCHASES)?,
        total_sales_completed: summary.number(config::CELL_TOTAL_SALES_COMPLETED)?,
        profit_loss: summary.number(config::CELL_PROFIT_LOSS_COMPLETED)?,
        profit_status: summary.text(config::CELL_PROFIT_STATUS)?,

        last_updated: last_updated_display(dashboard.value(config::CELL_LAST_UPDATED)?),
        growth_rate: dashboard.number(config::CELL_GROWTH_RATE)?,
        pending_stock_value: dashboard.number(config::CELL_PENDING_STOCK_VALUE)?,
        qty_sold: dashboard.integer(config::CELL_QTY_SOLD)?,
        qty_pending: dashboard.integer(config::CELL_QTY_PENDING)?,

        monthly: dashboard.table(
            config::MONTH_HEADER_ROW,
            config::MONTH_DATA_ROWS,
            config::MONTH_COLS,
        )?,
        category_qty: dashboard.table(
            config::CATQTY_HEADER_ROW,
            config::CATQTY_DATA_ROWS,
            config::CATQTY_COLS,
        )?,
        pending_value: dashboard.table(
            config::PENDVAL_HEADER_ROW,
            config::PENDVAL_DATA_ROWS,
            config::PENDVAL_COLS,
        )?,
        contributions: partner_view(contributions),
        cash_pool: partner_view(cash_pool),
    })
}

/// The partner tables carry intermediate working columns; the page shows
/// only the partner name plus the last two columns.
fn partner_view(table: TableData) -> TableData {
    let n = table.headers.len();
    if n < 3 {
        return table;
    }
    table.project(&[0, n - 2, n - 1])
}

/// "Last updated" cell: stored either as a real Excel date or as a raw
/// serial number, shown as `Mon DD, YYYY`, or an em dash when absent.
fn last_updated_display(value: Option<&Data>) -> String {
    let serial = match value {
        Some(Data::DateTime(dt)) => Some(dt.as_f64()),
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    };
    serial
        .and_then(excel_serial_to_date)
        .unwrap_or_else(|| "—".to_string())
}
