use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::analysis::{correlation_matrix, CorrelationMatrix};
use crate::error::ReportError;
use crate::models::{Column, Dataset};

pub const HISTOGRAMS_FILE: &str = "histograms.png";
pub const BOXPLOT_FILE: &str = "boxplot.png";
pub const HEATMAP_FILE: &str = "correlation_heatmap.png";
pub const BARPLOT_FILE: &str = "barplot.png";

/// Pixel size of the histogram grid figure.
const GRID_SIZE: (u32, u32) = (1000, 800);
/// Pixel size of the single-panel figures.
const FIGURE_SIZE: (u32, u32) = (1000, 600);
const HISTOGRAM_BINS: usize = 10;

/// The rendered chart artifacts of one run. Absent entries mean the dataset
/// shape did not call for that chart.
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub histograms: Option<PathBuf>,
    pub boxplot: Option<PathBuf>,
    pub heatmap: Option<PathBuf>,
    pub barplot: Option<PathBuf>,
}

impl ChartSet {
    /// Render every applicable chart into `out_dir`, creating the directory
    /// if needed. Rendering is synchronous; every file is fully written when
    /// this returns.
    pub fn render_all(dataset: &Dataset, out_dir: &Path) -> Result<Self, ReportError> {
        std::fs::create_dir_all(out_dir)?;

        Ok(Self {
            histograms: render_histograms(dataset, out_dir)?,
            boxplot: render_boxplot(dataset, out_dir)?,
            heatmap: render_heatmap(dataset, out_dir)?,
            barplot: render_barplot(dataset, out_dir)?,
        })
    }

    /// Chart sections in report order: heading plus path when present.
    pub fn sections(&self) -> [(&'static str, Option<&PathBuf>); 4] {
        [
            ("Histograms", self.histograms.as_ref()),
            ("Boxplot", self.boxplot.as_ref()),
            ("Correlation Heatmap", self.heatmap.as_ref()),
            ("Barplot (Categorical Distribution)", self.barplot.as_ref()),
        ]
    }

    pub fn present_count(&self) -> usize {
        self.sections().iter().filter(|(_, p)| p.is_some()).count()
    }
}

/// Render a grid with one panel per column: binned histograms for numeric
/// columns, frequency bars for text columns. Columns with no data are left
/// out; absent only when nothing at all can be drawn.
pub fn render_histograms(
    dataset: &Dataset,
    out_dir: &Path,
) -> Result<Option<PathBuf>, ReportError> {
    let panels: Vec<&Column> = dataset
        .columns
        .iter()
        .filter(|c| {
            if c.is_numeric() {
                !c.numeric_values().is_empty()
            } else {
                !c.value_counts().is_empty()
            }
        })
        .collect();
    if panels.is_empty() {
        return Ok(None);
    }

    let path = out_dir.join(HISTOGRAMS_FILE);
    draw_histogram_grid(&path, &panels).map_err(chart_err)?;
    debug!(path = %path.display(), panels = panels.len(), "wrote histogram grid");
    Ok(Some(path))
}

/// Render one box-and-whisker per numeric column; absent when the dataset has
/// no numeric data.
pub fn render_boxplot(dataset: &Dataset, out_dir: &Path) -> Result<Option<PathBuf>, ReportError> {
    let series: Vec<(String, Vec<f64>)> = dataset
        .numeric_columns()
        .iter()
        .map(|c| (c.name.clone(), c.numeric_values()))
        .filter(|(_, values)| !values.is_empty())
        .collect();
    if series.is_empty() {
        return Ok(None);
    }

    let path = out_dir.join(BOXPLOT_FILE);
    draw_boxplot(&path, &series).map_err(chart_err)?;
    debug!(path = %path.display(), "wrote boxplot");
    Ok(Some(path))
}

/// Render the correlation heatmap over the numeric columns; absent when the
/// dataset has no numeric columns.
pub fn render_heatmap(dataset: &Dataset, out_dir: &Path) -> Result<Option<PathBuf>, ReportError> {
    let has_data = dataset
        .numeric_columns()
        .iter()
        .any(|c| !c.numeric_values().is_empty());
    let matrix = correlation_matrix(dataset);
    if !has_data || matrix.is_empty() {
        return Ok(None);
    }

    let path = out_dir.join(HEATMAP_FILE);
    draw_heatmap(&path, &matrix).map_err(chart_err)?;
    debug!(path = %path.display(), "wrote correlation heatmap");
    Ok(Some(path))
}

/// Render value frequencies of the first text column; absent when the dataset
/// has no text column with data.
pub fn render_barplot(dataset: &Dataset, out_dir: &Path) -> Result<Option<PathBuf>, ReportError> {
    let Some(column) = dataset.first_text_column() else {
        return Ok(None);
    };
    let counts = column.value_counts();
    if counts.is_empty() {
        return Ok(None);
    }

    let path = out_dir.join(BARPLOT_FILE);
    draw_barplot(&path, &column.name, &counts).map_err(chart_err)?;
    debug!(path = %path.display(), "wrote barplot");
    Ok(Some(path))
}

fn chart_err(e: Box<dyn StdError>) -> ReportError {
    ReportError::Chart(e.to_string())
}

fn draw_histogram_grid(path: &Path, panels: &[&Column]) -> Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, GRID_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let cols = (panels.len() as f64).sqrt().ceil() as usize;
    let rows = panels.len().div_ceil(cols);
    let areas = root.split_evenly((rows, cols));

    for (area, column) in areas.iter().zip(panels.iter().copied()) {
        if column.is_numeric() {
            draw_numeric_histogram(area, column)?;
        } else {
            let counts = column.value_counts();
            draw_count_bars(area, &column.name, &counts)?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_numeric_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    column: &Column,
) -> Result<(), Box<dyn StdError>>
where
    DB::ErrorType: 'static,
{
    let values = column.numeric_values();
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    // Degenerate single-value columns still get one full-width bin.
    let width = if span > 0.0 {
        span / HISTOGRAM_BINS as f64
    } else {
        1.0
    };

    let mut counts = vec![0u32; HISTOGRAM_BINS];
    for value in &values {
        let index = (((value - lo) / width) as usize).min(HISTOGRAM_BINS - 1);
        counts[index] += 1;
    }
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1);
    let x_max = lo + width * HISTOGRAM_BINS as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(&column.name, ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(32)
        .build_cartesian_2d(lo..x_max, 0u32..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(5)
        .y_labels(4)
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = lo + width * i as f64;
        let x1 = x0 + width;
        Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.6).filled())
    }))?;
    Ok(())
}

fn draw_count_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    counts: &[(String, usize)],
) -> Result<(), Box<dyn StdError>>
where
    DB::ErrorType: 'static,
{
    let labels: Vec<&str> = counts.iter().map(|(value, _)| value.as_str()).collect();
    let y_max = counts
        .iter()
        .map(|(_, n)| *n as u32)
        .max()
        .unwrap_or(1)
        .max(1);
    let n = counts.len() as u32;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(28)
        .y_label_area_size(32)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len())
        .x_label_formatter(&|value| segment_label(value, &labels))
        .y_labels(4)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(GREEN.mix(0.6).filled())
            .margin(4)
            .data(
                counts
                    .iter()
                    .enumerate()
                    .map(|(i, (_, n))| (i as u32, *n as u32)),
            ),
    )?;
    Ok(())
}

fn draw_boxplot(path: &Path, series: &[(String, Vec<f64>)]) -> Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = series.iter().map(|(name, _)| name.as_str()).collect();
    let lo = series
        .iter()
        .flat_map(|(_, values)| values)
        .copied()
        .fold(f64::INFINITY, f64::min);
    let hi = series
        .iter()
        .flat_map(|(_, values)| values)
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((hi - lo) * 0.05).max(0.5);
    let n = series.len() as u32;
    // Boxplot elements carry f32 whisker values, so the y axis follows suit.
    let y_range = (lo - pad) as f32..(hi + pad) as f32;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(32)
        .y_label_area_size(48)
        .build_cartesian_2d((0..n).into_segmented(), y_range)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(series.len())
        .x_label_formatter(&|value| segment_label(value, &labels))
        .draw()?;

    for (i, (_, values)) in series.iter().enumerate() {
        let quartiles = Quartiles::new(values);
        chart.draw_series(std::iter::once(Boxplot::new_vertical(
            SegmentValue::CenterOf(i as u32),
            &quartiles,
        )))?;
    }

    root.present()?;
    Ok(())
}

fn draw_heatmap(path: &Path, matrix: &CorrelationMatrix) -> Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = matrix.labels.iter().map(String::as_str).collect();
    let n = matrix.size() as u32;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(matrix.size())
        .y_labels(matrix.size())
        .x_label_formatter(&|value| segment_label(value, &labels))
        .y_label_formatter(&|value| segment_label(value, &labels))
        .draw()?;

    for i in 0..matrix.size() {
        for j in 0..matrix.size() {
            let r = matrix.values[i][j];
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (
                        SegmentValue::Exact(i as u32),
                        SegmentValue::Exact(j as u32),
                    ),
                    (
                        SegmentValue::Exact(i as u32 + 1),
                        SegmentValue::Exact(j as u32 + 1),
                    ),
                ],
                correlation_color(r).filled(),
            )))?;

            let text_color = if r.abs() > 0.6 { &WHITE } else { &BLACK };
            let style = ("sans-serif", 14)
                .into_font()
                .color(text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", r),
                (
                    SegmentValue::CenterOf(i as u32),
                    SegmentValue::CenterOf(j as u32),
                ),
                style,
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_barplot(
    path: &Path,
    name: &str,
    counts: &[(String, usize)],
) -> Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    draw_count_bars(&root, name, counts)?;
    root.present()?;
    Ok(())
}

fn segment_label(value: &SegmentValue<u32>, labels: &[&str]) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels
            .get(*i as usize)
            .map(|label| label.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Map a coefficient in [-1, 1] onto a blue-white-red ramp.
fn correlation_color(r: f64) -> RGBColor {
    let t = r.clamp(-1.0, 1.0);
    let blend = |a: u8, b: u8, f: f64| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    if t < 0.0 {
        let f = 1.0 + t;
        RGBColor(blend(59, 255, f), blend(76, 255, f), blend(192, 255, f))
    } else {
        let f = 1.0 - t;
        RGBColor(blend(180, 255, f), blend(4, 255, f), blend(38, 255, f))
    }
}
