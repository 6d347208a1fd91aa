use serde::{Deserialize, Serialize};

use crate::models::{ColumnData, Dataset};

/// Pairwise Pearson correlation coefficients between the numeric columns of a
/// dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in source order.
    pub labels: Vec<String>,
    /// `values[i][j]` is the coefficient between columns `i` and `j`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Compute the correlation matrix over the numeric columns.
///
/// Rows missing either value are skipped per pair. A pair with fewer than two
/// complete rows, or with zero variance on either side, yields 0.0. The
/// diagonal is always 1.0.
pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let numeric: Vec<(&str, &[Option<f64>])> = dataset
        .columns
        .iter()
        .filter_map(|column| match &column.data {
            ColumnData::Numeric(values) => Some((column.name.as_str(), values.as_slice())),
            ColumnData::Text(_) => None,
        })
        .collect();

    let n = numeric.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(numeric[i].1, numeric[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        labels: numeric.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}

/// Pearson coefficient over pairwise-complete observations.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return 0.0;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}
