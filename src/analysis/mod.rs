mod correlation;
mod summary;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use summary::{ColumnSummary, SummaryTable, PLACEHOLDER};
