use serde::{Deserialize, Serialize};

/// Values of a single column, uniformly typed by inference at load time.
///
/// Missing cells are `None`. A column is numeric when every non-empty cell
/// parses as a float; otherwise it is text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// A named column of a loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Create a text column.
    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    /// Number of cells, including missing ones.
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of non-missing cells.
    pub fn count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_some()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_some()).count(),
        }
    }

    /// Non-missing numeric values, in row order. Empty for text columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter_map(|c| *c).collect(),
            ColumnData::Text(_) => Vec::new(),
        }
    }

    /// Occurrence counts of the distinct non-missing values of a text column,
    /// ordered by first appearance. Empty for numeric columns.
    pub fn value_counts(&self) -> Vec<(String, usize)> {
        let ColumnData::Text(values) = &self.data else {
            return Vec::new();
        };

        let mut counts: Vec<(String, usize)> = Vec::new();
        for value in values.iter().flatten() {
            match counts.iter_mut().find(|(v, _)| v.as_str() == value.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((value.clone(), 1)),
            }
        }
        counts
    }
}

/// An ordered, immutable-after-load tabular dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// File name of the source the dataset was loaded from.
    pub name: String,
    /// Columns in source order.
    pub columns: Vec<Column>,
    num_rows: usize,
}

impl Dataset {
    /// Create a dataset from already-built columns.
    pub fn new(name: impl Into<String>, columns: Vec<Column>, num_rows: usize) -> Self {
        Self {
            name: name.into(),
            columns,
            num_rows,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Columns inferred as numeric, in source order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }

    /// Columns inferred as text, in source order.
    pub fn text_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| !c.is_numeric()).collect()
    }

    /// The first text column, if any. The categorical barplot only ever
    /// considers this column.
    pub fn first_text_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| !c.is_numeric())
    }
}
