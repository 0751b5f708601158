use std::path::PathBuf;
use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("input workbook not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("worksheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("invalid cell address '{0}'")]
    Address(String),

    #[error("cell {sheet}!{address}: {reason}")]
    Cell {
        sheet: String,
        address: String,
        reason: String,
    },

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}
