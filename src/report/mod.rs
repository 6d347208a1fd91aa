pub mod fonts;
mod pdf;

pub use pdf::{write_report, REPORT_FILE, REPORT_TITLE};
