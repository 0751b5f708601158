use clap::Parser;
use colored::Colorize;
use sheetboard::error::BoardResult;
use sheetboard::{builder, config};
use std::path::Path;

#[derive(Parser)]
#[command(name = "sheetboard")]
#[command(about = "Build a static HTML dashboard from the business summary workbook.")]
#[command(long_about = "Sheetboard - static dashboard builder

Reads the 'Summary' and 'Dashboard' worksheets from the workbook at
input/Business-Summary-Latest.xlsx, extracts the KPI cells and tables,
and writes dist/index.html plus a copy of the workbook for the page's
download link.

There are no flags: sheet names, cell addresses, and paths are constants
in src/config.rs. Edit them there if the workbook layout changes.

The run aborts on the first problem (missing file, missing sheet,
non-numeric KPI cell) without writing any output.")]
#[command(version)]
struct Cli {}

fn main() -> BoardResult<()> {
    let _cli = Cli::parse();

    println!("{}", "📊 Sheetboard - Building dashboard".bold().green());
    println!("   Input: {}", config::INPUT_XLSX);
    println!();

    let artifacts = builder::build(Path::new(config::INPUT_XLSX), Path::new(config::DIST_DIR))?;

    println!(
        "{} {}",
        "✅ Built dashboard:".bold().green(),
        artifacts.html_path.display()
    );
    println!(
        "⬇️  Workbook download file: {}",
        artifacts.workbook_copy.display()
    );

    Ok(())
}
