//! Data extracted from the workbook, ready for rendering.

/// A single table cell after extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Display text for a cell: numbers through the standard number
    /// formatting (thousands separators, trimmed decimals), no currency.
    pub fn display(&self) -> String {
        match self {
            Cell::Number(n) => crate::format::format_number(*n),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }
}

/// A rectangular cell range read from a worksheet: one header row plus
/// data rows, column-addressable by header name.
#[derive(Debug, Clone)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Numeric column by header. Non-numeric and empty cells coerce to 0.0,
    /// the same as the dashboards this layout came from.
    pub fn number_column(&self, header: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(header)?;
        Some(
            self.rows
                .iter()
                .map(|row| match row.get(idx) {
                    Some(Cell::Number(n)) => *n,
                    Some(Cell::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
                    _ => 0.0,
                })
                .collect(),
        )
    }

    /// Text column by header (numbers rendered plainly, empties as "").
    pub fn text_column(&self, header: &str) -> Option<Vec<String>> {
        let idx = self.column_index(header)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(Cell::display).unwrap_or_default())
                .collect(),
        )
    }

    /// Keep only the columns at the given indices, in the given order.
    pub fn project(&self, indices: &[usize]) -> TableData {
        let headers = indices
            .iter()
            .filter_map(|&i| self.headers.get(i).cloned())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect();
        TableData::new(headers, rows)
    }
}

/// Everything the page needs, extracted in one pass before any file is
/// written.
#[derive(Debug, Clone)]
pub struct DashboardData {
    // Summary KPIs
    pub total_revenue: f64,
    pub total_purchases: f64,
    pub total_sales_completed: f64,
    pub profit_loss: f64,
    pub profit_status: String,

    // Dashboard KPIs
    pub last_updated: String,
    pub growth_rate: f64,
    pub pending_stock_value: f64,
    pub qty_sold: i64,
    pub qty_pending: i64,

    // Tables
    pub monthly: TableData,
    pub category_qty: TableData,
    pub pending_value: TableData,
    pub contributions: TableData,
    pub cash_pool: TableData,
}
