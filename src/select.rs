use std::path::PathBuf;

use tracing::debug;

/// Ask the user for an input file through the platform file chooser.
///
/// The chooser is restricted to `*.csv`. Returns `None` when the dialog is
/// dismissed without a selection; the caller treats that as a fatal
/// "no file selected" condition.
pub fn pick_input_file() -> Option<PathBuf> {
    let file = rfd::FileDialog::new()
        .set_title("Select a CSV File")
        .add_filter("CSV Files", &["csv"])
        .pick_file();

    match &file {
        Some(path) => debug!(path = %path.display(), "file selected"),
        None => debug!("file dialog dismissed without a selection"),
    }
    file
}
