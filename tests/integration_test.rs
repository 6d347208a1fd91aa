use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tempfile::TempDir;

use dataset_report_generator::{
    analysis::{correlation_matrix, SummaryTable, PLACEHOLDER},
    generate_report, io,
    report::fonts,
    visualization::ChartSet,
};

/// Chart text goes through the system font database; rendering tests skip on
/// hosts without a resolvable sans-serif face.
fn text_rendering_available() -> bool {
    let mut buffer = vec![0u8; 100 * 50 * 3];
    let root = BitMapBackend::with_buffer(&mut buffer, (100, 50)).into_drawing_area();
    root.draw(&Text::new("probe", (10, 10), ("sans-serif", 12)))
        .is_ok()
}

/// Write the 100-row, 3-column (2 numeric, 1 text) scenario dataset.
fn write_mixed_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("measurements.csv");
    let mut contents = String::from("temperature,pressure,site\n");
    for i in 0..100 {
        let site = ["north", "south", "east"][i % 3];
        contents.push_str(&format!("{}.5,{},{}\n", 10 + i % 20, 980 + i, site));
    }
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_text_only_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("words.csv");
    std::fs::write(&path, "word\nred\nblue\nred\ngreen\n").unwrap();
    path
}

// ============================================================================
// Load + summarize
// ============================================================================

#[test]
fn test_load_mixed_dataset_shape() {
    let dir = TempDir::new().unwrap();
    let ds = io::read_csv(write_mixed_csv(&dir)).unwrap();

    assert_eq!(ds.num_rows(), 100);
    assert_eq!(ds.num_columns(), 3);
    assert_eq!(ds.numeric_columns().len(), 2);
    assert_eq!(ds.first_text_column().unwrap().name, "site");
    assert_eq!(ds.name, "measurements.csv");
}

#[test]
fn test_summary_one_row_per_column() {
    let dir = TempDir::new().unwrap();
    let ds = io::read_csv(write_mixed_csv(&dir)).unwrap();
    let summary = SummaryTable::compute(&ds);

    assert_eq!(summary.len(), 3);
    for row in &summary.rows {
        for cell in row.stat_cells() {
            assert!(!cell.is_empty());
        }
    }
}

#[test]
fn test_summary_text_column_uses_placeholders() {
    let dir = TempDir::new().unwrap();
    let ds = io::read_csv(write_text_only_csv(&dir)).unwrap();
    let summary = SummaryTable::compute(&ds);

    let row = &summary.rows[0];
    assert_eq!(row.count, 4);
    assert_eq!(row.unique, Some(3));
    assert_eq!(row.top.as_deref(), Some("red"));
    assert_eq!(row.freq, Some(2));
    // Every moment/quantile cell falls back to the placeholder.
    for cell in &row.stat_cells()[1..] {
        assert_eq!(cell, PLACEHOLDER);
    }
}

#[test]
fn test_correlation_matrix_shape() {
    let dir = TempDir::new().unwrap();
    let ds = io::read_csv(write_mixed_csv(&dir)).unwrap();
    let matrix = correlation_matrix(&ds);

    assert_eq!(matrix.size(), 2);
    assert!((matrix.values[0][0] - 1.0).abs() < 1e-9);
    assert!((matrix.values[0][1] - matrix.values[1][0]).abs() < 1e-9);
}

// ============================================================================
// Chart artifacts
// ============================================================================

#[test]
fn test_mixed_dataset_produces_four_artifacts() {
    if !text_rendering_available() {
        eprintln!("skipping: no usable system fonts for chart text");
        return;
    }

    let dir = TempDir::new().unwrap();
    let ds = io::read_csv(write_mixed_csv(&dir)).unwrap();
    let out_dir = dir.path().join("report_output");
    let charts = ChartSet::render_all(&ds, &out_dir).unwrap();

    assert_eq!(charts.present_count(), 4);
    for (_, path) in charts.sections() {
        assert!(path.unwrap().exists());
    }
}

#[test]
fn test_text_only_dataset_produces_two_artifacts() {
    if !text_rendering_available() {
        eprintln!("skipping: no usable system fonts for chart text");
        return;
    }

    let dir = TempDir::new().unwrap();
    let ds = io::read_csv(write_text_only_csv(&dir)).unwrap();
    let out_dir = dir.path().join("report_output");
    let charts = ChartSet::render_all(&ds, &out_dir).unwrap();

    assert_eq!(charts.present_count(), 2);
    assert!(charts.histograms.is_some());
    assert!(charts.barplot.is_some());
    assert!(charts.boxplot.is_none());
    assert!(charts.heatmap.is_none());
}

#[test]
fn test_rerun_regenerates_same_artifact_set() {
    if !text_rendering_available() {
        eprintln!("skipping: no usable system fonts for chart text");
        return;
    }

    let dir = TempDir::new().unwrap();
    let csv_path = write_mixed_csv(&dir);
    let out_dir = dir.path().join("report_output");

    let names = |charts: &ChartSet| -> Vec<String> {
        charts
            .sections()
            .iter()
            .filter_map(|(_, p)| p.map(|p| p.file_name().unwrap().to_string_lossy().to_string()))
            .collect()
    };

    let first = ChartSet::render_all(&io::read_csv(&csv_path).unwrap(), &out_dir).unwrap();
    let second = ChartSet::render_all(&io::read_csv(&csv_path).unwrap(), &out_dir).unwrap();
    assert_eq!(names(&first), names(&second));
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_generate_report_end_to_end() {
    if !text_rendering_available() {
        eprintln!("skipping: no usable system fonts for chart text");
        return;
    }
    if !fonts::default_fonts_available() {
        eprintln!("skipping: bundled fonts not installed");
        return;
    }

    let dir = TempDir::new().unwrap();
    let csv_path = write_mixed_csv(&dir);
    let out_dir = dir.path().join("report_output");

    let artifacts = generate_report(&csv_path, &out_dir).unwrap();

    assert_eq!(
        artifacts.pdf.file_name().unwrap(),
        "data_analysis_report.pdf"
    );
    assert!(std::fs::metadata(&artifacts.pdf).unwrap().len() > 0);
    assert_eq!(artifacts.charts.present_count(), 4);

    // Second run overwrites in place with the same file set.
    let again = generate_report(&csv_path, &out_dir).unwrap();
    assert_eq!(again.pdf, artifacts.pdf);
}

#[test]
fn test_generate_report_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("report_output");

    let result = generate_report(Path::new("/nonexistent/input.csv"), &out_dir);
    assert!(result.is_err());
    // A failed load never creates the output directory.
    assert!(!out_dir.exists());
}
