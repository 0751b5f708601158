//! Static dashboard page rendering.
//!
//! The output is a single self-contained page: inline CSS, chart data
//! embedded as JSON, Plotly loaded from its CDN. No timestamps are
//! embedded, so identical input produces identical output.

use crate::config;
use crate::error::BoardResult;
use crate::format::{format_int, money0, money2, percent};
use crate::types::{Cell, DashboardData, TableData};
use serde::Serialize;
use serde_json::{json, Value};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// Render the full dashboard page.
pub fn render_dashboard(data: &DashboardData) -> BoardResult<String> {
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Business Summary Dashboard</title>
<style>{css}</style>
<script src="{plotly}"></script>
</head>
<body>
<div class="container">
<header>
<h1>Business Summary</h1>
<p class="updated">Last updated: {last_updated}</p>
</header>
{kpis}
{charts}
<div class="tables">
{contrib_table}
{cash_table}
</div>
<section class="download">
<a href="{excel_filename}" download>&#11015;&#65039; Download the latest workbook</a>
</section>
<footer>Generated by sheetboard</footer>
</div>
</body>
</html>
"#,
        css = inline_css(),
        plotly = PLOTLY_CDN,
        last_updated = html_escape(&data.last_updated),
        kpis = render_kpi_cards(data),
        charts = render_charts(data)?,
        contrib_table = render_table_section("Partner Contributions", &data.contributions),
        cash_table = render_table_section("Cash Pool Summary", &data.cash_pool),
        excel_filename = config::WORKBOOK_COPY_NAME,
    ))
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

fn render_kpi_cards(data: &DashboardData) -> String {
    let cards: [(&str, String, Option<&str>); 8] = [
        ("Total Revenue", money0(data.total_revenue), None),
        ("Total Purchases", money0(data.total_purchases), None),
        (
            "Total Sales (Completed)",
            money0(data.total_sales_completed),
            None,
        ),
        (
            "Profit / Loss (Completed)",
            money0(data.profit_loss),
            Some(data.profit_status.as_str()),
        ),
        ("Growth Rate", percent(data.growth_rate), None),
        ("Pending Stock Value", money2(data.pending_stock_value), None),
        ("Qty Sold", format_int(data.qty_sold), None),
        ("Qty Pending", format_int(data.qty_pending), None),
    ];

    let mut out = String::from("<section class=\"kpi-grid\">\n");
    for (label, value, status) in cards {
        let status_html = match status {
            Some(s) if !s.is_empty() => {
                format!("<span class=\"kpi-status\">{}</span>", html_escape(s))
            }
            _ => String::new(),
        };
        out.push_str(&format!(
            "<div class=\"kpi-card\"><div class=\"kpi-label\">{label}</div>\
<div class=\"kpi-value\">{value}</div>{status_html}</div>\n",
            value = html_escape(&value),
        ));
    }
    out.push_str("</section>");
    out
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// A single Plotly trace, serialized straight into the page script.
#[derive(Serialize)]
struct Trace {
    x: Vec<String>,
    y: Vec<f64>,
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
}

impl Trace {
    fn bar(x: Vec<String>, y: Vec<f64>, name: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            kind: "bar",
            mode: None,
        }
    }

    fn line(x: Vec<String>, y: Vec<f64>, name: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            kind: "scatter",
            mode: Some("lines+markers"),
        }
    }
}

/// Either a live chart (div plus its `Plotly.newPlot` call) or a note
/// explaining that the expected columns are gone.
enum ChartSlot {
    Plot { div_id: &'static str, js: String },
    Missing(&'static str),
}

fn render_charts(data: &DashboardData) -> BoardResult<String> {
    let slots = [
        monthly_chart(&data.monthly)?,
        profit_chart(&data.monthly)?,
        category_qty_chart(&data.category_qty)?,
        pending_value_chart(&data.pending_value)?,
    ];

    let mut divs = String::new();
    let mut script = String::new();
    for slot in slots {
        match slot {
            ChartSlot::Plot { div_id, js } => {
                divs.push_str(&format!("<div class=\"chart\" id=\"{div_id}\"></div>\n"));
                script.push_str(&js);
                script.push('\n');
            }
            ChartSlot::Missing(note) => {
                divs.push_str(&format!(
                    "<div class=\"chart chart-missing\">{note}</div>\n"
                ));
            }
        }
    }

    Ok(format!(
        "<section class=\"charts\">\n{divs}</section>\n<script>\n{script}</script>"
    ))
}

fn plot_call(div_id: &str, traces: &[Trace], layout: &Value) -> BoardResult<String> {
    let plot_config = json!({"responsive": true, "displayModeBar": false});
    Ok(format!(
        "Plotly.newPlot('{div_id}', {traces}, {layout}, {plot_config});",
        traces = json_for_script(&traces)?,
        layout = json_for_script(layout)?,
        plot_config = json_for_script(&plot_config)?,
    ))
}

/// Serialize a value for embedding inside a `<script>` element. JSON
/// itself does not escape `<`, so cell text like `</script>` would
/// otherwise terminate the script block and inject markup into the page.
fn json_for_script<T: Serialize>(value: &T) -> BoardResult<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn monthly_chart(monthly: &TableData) -> BoardResult<ChartSlot> {
    let columns = (
        monthly.text_column(config::COL_MONTH),
        monthly.number_column(config::COL_PURCHASES),
        monthly.number_column(config::COL_SALES),
    );
    let (months, purchases, sales) = match columns {
        (Some(m), Some(p), Some(s)) => (m, p, s),
        _ => {
            return Ok(ChartSlot::Missing(
                "Monthly chart unavailable (columns changed).",
            ))
        }
    };

    let traces = [
        Trace::bar(months.clone(), purchases, "Purchases"),
        Trace::bar(months, sales, "Sales"),
    ];
    let layout = json!({"title": "Monthly Purchases vs Sales", "barmode": "group"});
    Ok(ChartSlot::Plot {
        div_id: "chart-monthly",
        js: plot_call("chart-monthly", &traces, &layout)?,
    })
}

fn profit_chart(monthly: &TableData) -> BoardResult<ChartSlot> {
    let columns = (
        monthly.text_column(config::COL_MONTH),
        monthly.number_column(config::COL_PROFIT),
    );
    let (months, profit) = match columns {
        (Some(m), Some(p)) => (m, p),
        _ => {
            return Ok(ChartSlot::Missing(
                "Profit chart unavailable (columns changed).",
            ))
        }
    };

    let traces = [Trace::line(months, profit, "Profit")];
    let layout = json!({"title": format!("Monthly Profit ({})", config::CURRENCY_SYMBOL)});
    Ok(ChartSlot::Plot {
        div_id: "chart-profit",
        js: plot_call("chart-profit", &traces, &layout)?,
    })
}

fn category_qty_chart(category_qty: &TableData) -> BoardResult<ChartSlot> {
    let columns = (
        category_qty.text_column(config::COL_CATEGORY),
        category_qty.number_column(config::COL_QTY_SOLD),
        category_qty.number_column(config::COL_QTY_PENDING),
    );
    let (categories, sold, pending) = match columns {
        (Some(c), Some(s), Some(p)) => (c, s, p),
        _ => {
            return Ok(ChartSlot::Missing(
                "Category qty chart unavailable (columns changed).",
            ))
        }
    };

    let traces = [
        Trace::bar(categories.clone(), sold, "Qty Sold"),
        Trace::bar(categories, pending, "Qty Pending"),
    ];
    let layout = json!({"title": "Quantity by Category", "barmode": "stack"});
    Ok(ChartSlot::Plot {
        div_id: "chart-cat-qty",
        js: plot_call("chart-cat-qty", &traces, &layout)?,
    })
}

fn pending_value_chart(pending_value: &TableData) -> BoardResult<ChartSlot> {
    let columns = (
        pending_value.text_column(config::COL_CATEGORY),
        pending_value.number_column(config::COL_PENDING_VALUE),
    );
    let (categories, values) = match columns {
        (Some(c), Some(v)) => (c, v),
        _ => {
            return Ok(ChartSlot::Missing(
                "Pending value chart unavailable (columns changed).",
            ))
        }
    };

    let traces = [Trace::bar(categories, values, "Pending Value")];
    let layout = json!({
        "title": format!("Pending Stock Value by Category ({})", config::CURRENCY_SYMBOL)
    });
    Ok(ChartSlot::Plot {
        div_id: "chart-pending-val",
        js: plot_call("chart-pending-val", &traces, &layout)?,
    })
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

fn render_table_section(title: &str, table: &TableData) -> String {
    let head: String = table
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", html_escape(h)))
        .collect();
    let currency: Vec<bool> = table
        .headers
        .iter()
        .map(|h| is_currency_header(h))
        .collect();

    let mut body = String::new();
    for row in &table.rows {
        body.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            let text = match cell {
                Cell::Number(n) if currency.get(i).copied().unwrap_or(false) => money2(*n),
                other => other.display(),
            };
            let class = if matches!(cell, Cell::Number(_)) {
                " class=\"num\""
            } else {
                ""
            };
            body.push_str(&format!("<td{class}>{}</td>", html_escape(&text)));
        }
        body.push_str("</tr>\n");
    }

    format!(
        "<section class=\"table-card\">\n<h2>{title}</h2>\n<table>\n\
<thead><tr>{head}</tr></thead>\n<tbody>\n{body}</tbody>\n</table>\n</section>"
    )
}

/// Columns holding money are recognized by the currency symbol or the
/// usual header keywords, and rendered with two decimals.
fn is_currency_header(header: &str) -> bool {
    const KEYWORDS: [&str; 9] = [
        "amount",
        "value",
        "paid",
        "balance",
        "target",
        "excess",
        "collected",
        "transferred",
        "share",
    ];
    if header.contains(config::CURRENCY_SYMBOL) {
        return true;
    }
    let lower = header.to_lowercase();
    KEYWORDS.iter().any(|k| lower.contains(k))
}

// ---------------------------------------------------------------------------
// Page chrome
// ---------------------------------------------------------------------------

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
:root { --bg: #f3f4f6; --card: #ffffff; --ink: #111827; --muted: #6b7280; --accent: #2563eb; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; background: var(--bg); color: var(--ink); }
.container { max-width: 1100px; margin: 0 auto; padding: 24px 16px 48px; }
header { margin-bottom: 24px; }
header h1 { font-size: 28px; }
.updated { color: var(--muted); font-size: 13px; margin-top: 4px; }
.kpi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px; margin-bottom: 24px; }
.kpi-card { background: var(--card); border-radius: 10px; padding: 14px 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.kpi-label { color: var(--muted); font-size: 12px; text-transform: uppercase; letter-spacing: 0.04em; }
.kpi-value { font-size: 22px; font-weight: 600; margin-top: 4px; }
.kpi-status { display: inline-block; margin-top: 6px; padding: 2px 8px; border-radius: 999px; background: #eef2ff; color: var(--accent); font-size: 12px; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 12px; margin-bottom: 24px; }
.chart { background: var(--card); border-radius: 10px; min-height: 320px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.chart-missing { display: flex; align-items: center; justify-content: center; color: var(--muted); font-size: 13px; }
.tables { display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 12px; margin-bottom: 24px; }
.table-card { background: var(--card); border-radius: 10px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.table-card h2 { font-size: 16px; margin-bottom: 10px; }
table { width: 100%; border-collapse: collapse; font-size: 14px; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e5e7eb; }
th { color: var(--muted); font-weight: 600; font-size: 12px; text-transform: uppercase; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
.download { margin-bottom: 24px; }
.download a { display: inline-block; background: var(--accent); color: #fff; text-decoration: none; padding: 10px 18px; border-radius: 8px; font-weight: 600; }
footer { color: var(--muted); font-size: 12px; text-align: center; }
"#
}
