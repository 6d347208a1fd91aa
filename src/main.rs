use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dataset_report_generator::{generate_report, select, ReportError, OUTPUT_DIR};

#[derive(Parser)]
#[command(
    name = "dataset-report",
    about = "Dataset Report Generator - PDF analysis report for an interactively chosen CSV file",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    Cli::parse();

    let input = select::pick_input_file().ok_or(ReportError::NoFileSelected)?;
    info!(input = %input.display(), "input selected");

    let artifacts = generate_report(&input, Path::new(OUTPUT_DIR))?;

    println!(
        "{} Report generated: {}",
        "Success:".green().bold(),
        artifacts.pdf.display()
    );

    Ok(())
}
