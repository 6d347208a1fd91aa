//! Loading of the bundled report fonts.

use std::io;
use std::path::PathBuf;

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Name of the bundled font family.
pub const FONT_FAMILY_NAME: &str = "Roboto";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

fn bundled_font_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

/// Load the bundled font family used by the report document.
///
/// Fails with an actionable message when any of the font files is missing;
/// see `assets/fonts/README.md` for setup.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = bundled_font_directory();

    let missing: Vec<_> = FONT_FILES
        .iter()
        .map(|name| directory.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect();
    if !missing.is_empty() {
        let display_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::new(
            format!(
                "missing bundled font files: {}. See assets/fonts/README.md for setup.",
                display_list
            ),
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts missing"),
        ));
    }

    fonts::from_files(&directory, FONT_FAMILY_NAME, None)
}

/// Whether every bundled font file required by the report is present on disk.
pub fn default_fonts_available() -> bool {
    let directory = bundled_font_directory();
    FONT_FILES
        .iter()
        .map(|name| directory.join(name))
        .all(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_family_matches_availability() {
        // The two entry points must agree on whether the bundle is usable.
        assert_eq!(default_fonts_available(), default_font_family().is_ok());
    }
}
