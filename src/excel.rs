//! Workbook access: open an .xlsx with calamine, look up worksheets by
//! name, and read fixed cells and ranges.

use crate::error::{BoardError, BoardResult};
use crate::types::{Cell, TableData};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse an A1-style cell address into zero-based (row, col).
pub fn parse_a1(address: &str) -> BoardResult<(u32, u32)> {
    let letters: String = address
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    let digits = &address[letters.len()..];
    if letters.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(BoardError::Address(address.to_string()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }
    let row: u32 = digits
        .parse()
        .map_err(|_| BoardError::Address(address.to_string()))?;
    if row == 0 {
        return Err(BoardError::Address(address.to_string()));
    }

    Ok((row - 1, col - 1))
}

/// An opened, read-only workbook.
pub struct WorkbookReader {
    workbook: Xlsx<BufReader<File>>,
}

impl WorkbookReader {
    pub fn open<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let workbook: Xlsx<_> = open_workbook(path)?;
        Ok(Self { workbook })
    }

    /// Look up a worksheet by name. Missing sheets are fatal.
    pub fn sheet(&mut self, name: &str) -> BoardResult<Sheet> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|_| BoardError::MissingSheet(name.to_string()))?;
        Ok(Sheet {
            name: name.to_string(),
            range,
        })
    }
}

/// A single worksheet's used range, addressable by A1 cell references
/// and by 1-based row/column ranges.
pub struct Sheet {
    name: String,
    range: Range<Data>,
}

impl Sheet {
    /// Raw cell value at an A1 address. `None` when the cell lies outside
    /// the sheet's used range.
    pub fn value(&self, address: &str) -> BoardResult<Option<&Data>> {
        let (row, col) = parse_a1(address)?;
        Ok(self.range.get_value((row, col)))
    }

    /// Strict numeric read: empty or non-numeric cells are errors.
    pub fn number(&self, address: &str) -> BoardResult<f64> {
        match self.value(address)? {
            Some(Data::Float(f)) => Ok(*f),
            Some(Data::Int(i)) => Ok(*i as f64),
            Some(Data::DateTime(dt)) => Ok(dt.as_f64()),
            Some(Data::Empty) | None => {
                Err(self.cell_error(address, "expected a number, cell is empty"))
            }
            Some(other) => Err(self.cell_error(
                address,
                &format!("expected a number, found '{other}'"),
            )),
        }
    }

    /// Strict integer read (fractions truncate, as quantities are whole).
    pub fn integer(&self, address: &str) -> BoardResult<i64> {
        Ok(self.number(address)?.trunc() as i64)
    }

    /// Lenient text read: empty or missing cells become "".
    pub fn text(&self, address: &str) -> BoardResult<String> {
        Ok(match self.value(address)? {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Empty) | None => String::new(),
            Some(other) => other.to_string(),
        })
    }

    /// Read a header row plus inclusive data rows/columns (all 1-based,
    /// as they appear in Excel) into a `TableData`.
    pub fn table(
        &self,
        header_row: u32,
        data_rows: (u32, u32),
        cols: (u32, u32),
    ) -> BoardResult<TableData> {
        let headers = (cols.0..=cols.1)
            .map(|col| match self.range.get_value((header_row - 1, col - 1)) {
                Some(Data::Empty) | None => format!("col_{col}"),
                Some(value) => value.to_string(),
            })
            .collect();

        let rows = (data_rows.0..=data_rows.1)
            .map(|row| {
                (cols.0..=cols.1)
                    .map(|col| to_cell(self.range.get_value((row - 1, col - 1))))
                    .collect()
            })
            .collect();

        Ok(TableData::new(headers, rows))
    }

    fn cell_error(&self, address: &str, reason: &str) -> BoardError {
        BoardError::Cell {
            sheet: self.name.clone(),
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn to_cell(data: Option<&Data>) -> Cell {
    match data {
        Some(Data::Float(f)) => Cell::Number(*f),
        Some(Data::Int(i)) => Cell::Number(*i as f64),
        Some(Data::DateTime(dt)) => Cell::Number(dt.as_f64()),
        Some(Data::String(s)) => Cell::Text(s.clone()),
        Some(Data::Bool(b)) => Cell::Text(b.to_string()),
        Some(Data::Empty) | None => Cell::Empty,
        Some(other) => Cell::Text(other.to_string()),
    }
}
