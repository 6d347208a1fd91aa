use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::SummaryTable;
use crate::error::ReportError;
use crate::io;
use crate::report;
use crate::visualization::ChartSet;

/// Output directory for all artifacts, relative to the working directory.
pub const OUTPUT_DIR: &str = "report_output";

/// Everything a successful run leaves on disk.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub pdf: PathBuf,
    pub charts: ChartSet,
}

/// Run the full pipeline: load, summarize, render charts, assemble the PDF.
///
/// Each stage blocks until complete and any failure propagates; re-runs into
/// the same directory overwrite prior artifacts of the same names.
pub fn generate_report(input: &Path, out_dir: &Path) -> Result<ReportArtifacts, ReportError> {
    let dataset = io::read_csv(input)?;
    info!(
        rows = dataset.num_rows(),
        columns = dataset.num_columns(),
        "dataset loaded"
    );

    let summary = SummaryTable::compute(&dataset);
    let charts = ChartSet::render_all(&dataset, out_dir)?;
    info!(charts = charts.present_count(), "charts rendered");

    let pdf = report::write_report(&dataset, &summary, &charts, out_dir)?;
    Ok(ReportArtifacts { pdf, charts })
}
