use std::path::{Path, PathBuf};

use genpdf::elements::{Break, FrameCellDecorator, Image, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Alignment, Element, SimplePageDecorator};
use tracing::debug;

use crate::analysis::{ColumnSummary, SummaryTable};
use crate::error::ReportError;
use crate::models::Dataset;
use crate::report::fonts;
use crate::visualization::ChartSet;

pub const REPORT_FILE: &str = "data_analysis_report.pdf";
pub const REPORT_TITLE: &str = "Automated Data Analysis Report";

/// The document table shows at most this many summary rows.
const MAX_TABLE_ROWS: usize = 20;

const TABLE_HEADERS: [&str; 9] = [
    "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
];

const IMAGE_DPI: f64 = 150.0;

/// Assemble the report document and write it into `out_dir`.
///
/// Block order is fixed: title, dataset file name, shape line, statistics
/// table, then one heading-plus-image section per present chart.
pub fn write_report(
    dataset: &Dataset,
    summary: &SummaryTable,
    charts: &ChartSet,
    out_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let mut doc = genpdf::Document::new(fonts::default_font_family()?);
    doc.set_title(REPORT_TITLE);
    doc.set_paper_size(genpdf::PaperSize::A4);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(
        Paragraph::new(REPORT_TITLE)
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(20)),
    );
    doc.push(Break::new(1.0));
    doc.push(Paragraph::new(format!("Dataset: {}", dataset.name)));
    doc.push(Paragraph::new(format!(
        "Rows: {}, Columns: {}",
        dataset.num_rows(),
        dataset.num_columns()
    )));
    doc.push(Break::new(1.0));

    doc.push(summary_table(summary)?);
    doc.push(Break::new(1.0));

    for (heading, path) in charts.sections() {
        let Some(path) = path else { continue };
        doc.push(Paragraph::new(heading).styled(Style::new().bold().with_font_size(14)));
        doc.push(Break::new(0.5));
        doc.push(
            Image::from_path(path)?
                .with_alignment(Alignment::Center)
                .with_dpi(IMAGE_DPI),
        );
        doc.push(Break::new(1.0));
    }

    let pdf_path = out_dir.join(REPORT_FILE);
    doc.render_to_file(&pdf_path)?;
    debug!(path = %pdf_path.display(), "wrote report document");
    Ok(pdf_path)
}

/// The leading summary rows shown in the document table.
fn table_rows(summary: &SummaryTable) -> &[ColumnSummary] {
    &summary.rows[..summary.rows.len().min(MAX_TABLE_ROWS)]
}

fn summary_table(summary: &SummaryTable) -> Result<TableLayout, ReportError> {
    let mut table = TableLayout::new(vec![3, 2, 2, 2, 2, 2, 2, 2, 2]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let header_cell =
        |text: &str| Paragraph::new(text).styled(Style::new().bold().with_font_size(9)).padded(1);
    let body_cell =
        |text: String| Paragraph::new(text).styled(Style::new().with_font_size(8)).padded(1);

    let mut row = table.row();
    for heading in TABLE_HEADERS {
        row = row.element(header_cell(heading));
    }
    row.push()?;

    for column in table_rows(summary) {
        let mut row = table.row();
        row = row.element(body_cell(column.name.clone()));
        for cell in column.stat_cells() {
            row = row.element(body_cell(cell));
        }
        row.push()?;
    }

    Ok(table)
}
