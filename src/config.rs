//! Layout constants - edit these if you rename tabs, move cells, or
//! change the output paths.
//!
//! Cell addresses are A1 style. Table ranges are 1-based and inclusive,
//! matching what you see in Excel's row/column headers.

/// Path of the input workbook, relative to the working directory.
pub const INPUT_XLSX: &str = "input/Business-Summary-Latest.xlsx";

/// Output directory for the generated site.
pub const DIST_DIR: &str = "dist";

/// Name the workbook copy is published under (download link target).
pub const WORKBOOK_COPY_NAME: &str = "Business-Summary-Latest.xlsx";

/// Symbol used by all currency formatting.
pub const CURRENCY_SYMBOL: &str = "$";

// ---------------------------------------------------------------------------
// Worksheets
// ---------------------------------------------------------------------------

pub const SHEET_SUMMARY: &str = "Summary";
pub const SHEET_DASHBOARD: &str = "Dashboard";

// ---------------------------------------------------------------------------
// Summary KPIs (cell addresses)
// ---------------------------------------------------------------------------

pub const CELL_TOTAL_REVENUE: &str = "B2";
pub const CELL_TOTAL_PURCHASES: &str = "B3";
pub const CELL_TOTAL_SALES_COMPLETED: &str = "B4";
pub const CELL_PROFIT_LOSS_COMPLETED: &str = "B6";
pub const CELL_PROFIT_STATUS: &str = "B7";

// ---------------------------------------------------------------------------
// Dashboard KPIs (cell addresses)
// ---------------------------------------------------------------------------

pub const CELL_LAST_UPDATED: &str = "B3";
pub const CELL_GROWTH_RATE: &str = "C5";
pub const CELL_PENDING_STOCK_VALUE: &str = "E6";
pub const CELL_QTY_SOLD: &str = "G10";
pub const CELL_QTY_PENDING: &str = "G11";

// ---------------------------------------------------------------------------
// Table ranges (header row, inclusive data rows, inclusive columns)
// ---------------------------------------------------------------------------

/// Monthly table: header in row 9, data rows 10-21, cols A-D.
pub const MONTH_HEADER_ROW: u32 = 9;
pub const MONTH_DATA_ROWS: (u32, u32) = (10, 21);
pub const MONTH_COLS: (u32, u32) = (1, 4);

/// Category quantities: header row 46, data 47-49, cols F-H.
pub const CATQTY_HEADER_ROW: u32 = 46;
pub const CATQTY_DATA_ROWS: (u32, u32) = (47, 49);
pub const CATQTY_COLS: (u32, u32) = (6, 8);

/// Pending value by category: header row 46, data 47-49, cols J-K.
pub const PENDVAL_HEADER_ROW: u32 = 46;
pub const PENDVAL_DATA_ROWS: (u32, u32) = (47, 49);
pub const PENDVAL_COLS: (u32, u32) = (10, 11);

/// Contribution summary: header row 17, data 18-20, cols A-G.
pub const CONTRIB_HEADER_ROW: u32 = 17;
pub const CONTRIB_DATA_ROWS: (u32, u32) = (18, 20);
pub const CONTRIB_COLS: (u32, u32) = (1, 7);

/// Cash pool summary: header row 25, data 26-28, cols A-F.
pub const CASH_HEADER_ROW: u32 = 25;
pub const CASH_DATA_ROWS: (u32, u32) = (26, 28);
pub const CASH_COLS: (u32, u32) = (1, 6);

// ---------------------------------------------------------------------------
// Expected table column headers (used by the charts)
// ---------------------------------------------------------------------------

pub const COL_MONTH: &str = "Month";
pub const COL_PURCHASES: &str = "Purchases ($)";
pub const COL_SALES: &str = "Sales ($)";
pub const COL_PROFIT: &str = "Profit ($)";
pub const COL_CATEGORY: &str = "Category";
pub const COL_QTY_SOLD: &str = "Qty Sold";
pub const COL_QTY_PENDING: &str = "Qty Pending";
pub const COL_PENDING_VALUE: &str = "Pending Value ($)";
