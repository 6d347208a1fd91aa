mod dataset;

pub use dataset::{Column, ColumnData, Dataset};
