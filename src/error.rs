use thiserror::Error;

/// Errors that can occur while generating a dataset report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no columns")]
    EmptyDataset,

    #[error("chart rendering error: {0}")]
    Chart(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] genpdf::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_selected_display() {
        let err = ReportError::NoFileSelected;
        assert_eq!(err.to_string(), "no file selected");
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ReportError::from(io_err);
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }

    #[test]
    fn test_empty_dataset_display() {
        let err = ReportError::EmptyDataset;
        assert_eq!(err.to_string(), "dataset has no columns");
    }

    #[test]
    fn test_chart_error_display() {
        let err = ReportError::Chart("backend closed".to_string());
        assert_eq!(err.to_string(), "chart rendering error: backend closed");
    }

    #[test]
    fn test_error_is_debug() {
        let err = ReportError::Chart("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Chart"));
    }
}
