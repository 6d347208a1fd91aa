use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Max, Min, OrderStatistics};

use crate::models::{Column, ColumnData, Dataset};

/// Rendered in place of any statistic that does not apply to a column.
pub const PLACEHOLDER: &str = "-";

/// Descriptive statistics for a single column.
///
/// Numeric columns populate the moment and quantile fields; text columns
/// populate `unique`, `top` and `freq`. Fields that do not apply stay `None`
/// and render as [`PLACEHOLDER`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
    pub unique: Option<usize>,
    pub top: Option<String>,
    pub freq: Option<usize>,
}

impl ColumnSummary {
    fn numeric(name: &str, values: Vec<f64>) -> Self {
        let count = values.len();
        if count == 0 {
            return Self::empty(name);
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        // Sample standard deviation; undefined for a single observation.
        let std = if count > 1 {
            let variance =
                values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        let mut data = Data::new(values);
        Self {
            name: name.to_string(),
            count,
            mean: finite(mean),
            std: std.and_then(finite),
            min: finite(data.min()),
            q25: finite(data.quantile(0.25)),
            median: finite(data.quantile(0.5)),
            q75: finite(data.quantile(0.75)),
            max: finite(data.max()),
            unique: None,
            top: None,
            freq: None,
        }
    }

    fn text(name: &str, column: &Column) -> Self {
        let counts = column.value_counts();
        // counts is in first-appearance order, so a strict comparison makes
        // the earliest value win ties, keeping re-runs deterministic.
        let mut top = None;
        let mut freq = None;
        for (value, n) in &counts {
            if freq.map_or(true, |f| *n > f) {
                top = Some(value.clone());
                freq = Some(*n);
            }
        }

        Self {
            count: column.count(),
            unique: Some(counts.len()),
            top,
            freq,
            ..Self::empty(name)
        }
    }

    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
            unique: None,
            top: None,
            freq: None,
        }
    }

    /// The eight fixed statistic cells of the report table, in order:
    /// count, mean, std, min, 25%, 50%, 75%, max. Inapplicable statistics
    /// render as the placeholder, never as an empty cell.
    pub fn stat_cells(&self) -> [String; 8] {
        [
            self.count.to_string(),
            format_stat(self.mean),
            format_stat(self.std),
            format_stat(self.min),
            format_stat(self.q25),
            format_stat(self.median),
            format_stat(self.q75),
            format_stat(self.max),
        ]
    }
}

/// One summary row per dataset column, in dataset column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<ColumnSummary>,
}

impl SummaryTable {
    /// Compute descriptive statistics for every column of the dataset.
    pub fn compute(dataset: &Dataset) -> Self {
        let rows = dataset
            .columns
            .iter()
            .map(|column| match &column.data {
                ColumnData::Numeric(_) => {
                    ColumnSummary::numeric(&column.name, column.numeric_values())
                }
                ColumnData::Text(_) => ColumnSummary::text(&column.name, column),
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Format a statistic for display, trimming insignificant trailing zeros.
fn format_stat(value: Option<f64>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };

    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
