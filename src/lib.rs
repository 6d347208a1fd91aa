pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod select;
pub mod visualization;

pub use analysis::{correlation_matrix, ColumnSummary, CorrelationMatrix, SummaryTable};
pub use error::ReportError;
pub use models::{Column, ColumnData, Dataset};
pub use pipeline::{generate_report, ReportArtifacts, OUTPUT_DIR};
pub use visualization::ChartSet;
