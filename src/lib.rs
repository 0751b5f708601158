//! Sheetboard - static HTML dashboard builder for a fixed-layout Excel
//! business summary workbook.
//!
//! Reads the `Summary` and `Dashboard` worksheets, extracts a fixed set of
//! KPI cells and table ranges, formats them as currency / percentages /
//! numbers, and publishes a self-contained `dist/index.html` plus a copy
//! of the workbook for the download link.
//!
//! # Features
//!
//! - Fixed cell-address layout, configurable in [`config`]
//! - Currency, percentage, and thousands-separator formatting
//! - Plotly charts with JSON payloads embedded in the page
//! - Byte-identical output for identical input (safe to re-publish)
//!
//! # Example
//!
//! ```no_run
//! use sheetboard::builder;
//! use std::path::Path;
//!
//! let input = Path::new("input/Business-Summary-Latest.xlsx");
//! let artifacts = builder::build(input, Path::new("dist"))?;
//!
//! println!("Page: {}", artifacts.html_path.display());
//! # Ok::<(), sheetboard::error::BoardError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod excel;
pub mod extract;
pub mod format;
pub mod html;
pub mod types;

// Re-export commonly used types
pub use builder::{build, BuildArtifacts};
pub use error::{BoardError, BoardResult};
pub use types::{Cell, DashboardData, TableData};
