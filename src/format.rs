//! Display formatting for KPI values: currency, percentages, plain
//! numbers with thousands separators, and Excel serial dates.

use crate::config::CURRENCY_SYMBOL;
use chrono::{Duration, NaiveDate};

/// Group an unsigned digit string with thousands separators.
fn group_digits(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Format a number for display: thousands separators, up to 6 decimal
/// places, trailing zeros removed.
pub fn format_number(n: f64) -> String {
    // Round to 6 decimal places first to drop float noise
    let rounded = (n * 1e6).round() / 1e6;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let fixed = format!("{:.6}", rounded.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed.split_once('.') {
        Some((int_part, frac)) => format!("{sign}{}.{frac}", group_digits(int_part)),
        None => format!("{sign}{}", group_digits(trimmed)),
    }
}

/// Integer with thousands separators (quantities).
pub fn format_int(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{sign}{}", group_digits(&n.unsigned_abs().to_string()))
}

/// Currency, no decimals: `money0(1000000.0)` is `$1,000,000`.
/// Negatives keep the sign after the symbol, `$-3,000`.
pub fn money0(x: f64) -> String {
    let sign = if x < 0.0 { "-" } else { "" };
    let fixed = format!("{:.0}", x.abs());
    format!("{CURRENCY_SYMBOL}{sign}{}", group_digits(&fixed))
}

/// Currency, two decimals: `money2(45000.5)` is `$45,000.50`.
pub fn money2(x: f64) -> String {
    let sign = if x < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", x.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{CURRENCY_SYMBOL}{sign}{}.{frac}", group_digits(int_part))
}

/// Ratio as a percentage with at most one decimal place:
/// `0.256` is `25.6%`, `0.15` is `15%`.
pub fn percent(ratio: f64) -> String {
    let fixed = format!("{:.1}", ratio * 100.0);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

/// Excel serial day number to a `Mon DD, YYYY` display date.
/// Serials count days from the 1900 epoch (with Excel's off-by-two,
/// hence the 1899-12-30 base).
pub fn excel_serial_to_date(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial <= 0.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = base.checked_add_signed(Duration::days(serial.trunc() as i64))?;
    Some(date.format("%b %d, %Y").to_string())
}
