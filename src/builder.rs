//! The build pipeline: open workbook, extract, render, publish.

use crate::config;
use crate::error::{BoardError, BoardResult};
use crate::excel::WorkbookReader;
use crate::extract;
use crate::html;
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by a successful build.
#[derive(Debug)]
pub struct BuildArtifacts {
    pub html_path: PathBuf,
    pub workbook_copy: PathBuf,
}

/// Build the dashboard from `input` into `dist`.
///
/// Extraction and rendering both complete before anything is written, so
/// a missing sheet or malformed KPI cell leaves prior output untouched.
/// A successful build overwrites whatever was in `dist` before.
pub fn build(input: &Path, dist: &Path) -> BoardResult<BuildArtifacts> {
    if !input.is_file() {
        return Err(BoardError::MissingInput(input.to_path_buf()));
    }

    let mut workbook = WorkbookReader::open(input)?;
    let data = extract::extract(&mut workbook)?;
    let page = html::render_dashboard(&data)?;

    fs::create_dir_all(dist)?;
    let html_path = dist.join("index.html");
    fs::write(&html_path, page)?;

    let workbook_copy = dist.join(config::WORKBOOK_COPY_NAME);
    fs::copy(input, &workbook_copy)?;

    Ok(BuildArtifacts {
        html_path,
        workbook_copy,
    })
}
