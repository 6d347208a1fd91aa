use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::ReportError;
use crate::models::{Column, Dataset};

fn parse_csv_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<(Vec<String>, Vec<csv::StringRecord>), ReportError> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }

    Ok((headers, records))
}

/// Build typed columns from raw records. A column is numeric when every
/// non-empty cell parses as a float; an all-missing column counts as numeric.
fn build_columns(headers: &[String], records: &[csv::StringRecord]) -> Vec<Column> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let cells: Vec<Option<&str>> = records
                .iter()
                .map(|record| record.get(index).filter(|cell| !cell.is_empty()))
                .collect();

            let numeric = cells
                .iter()
                .flatten()
                .all(|cell| cell.parse::<f64>().is_ok());

            if numeric {
                let values = cells
                    .iter()
                    .map(|cell| cell.and_then(|c| c.parse::<f64>().ok()))
                    .collect();
                Column::numeric(name.clone(), values)
            } else {
                let values = cells
                    .iter()
                    .map(|cell| cell.map(str::to_string))
                    .collect();
                Column::text(name.clone(), values)
            }
        })
        .collect()
}

/// Read a header-first, comma-delimited dataset from a file.
///
/// Column types are inferred per column; no explicit schema is accepted.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Dataset, ReportError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let (headers, records) = parse_csv_records(&mut rdr)?;
    if headers.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let num_rows = records.len();
    let columns = build_columns(&headers, &records);
    debug!(rows = num_rows, columns = columns.len(), "parsed CSV file");

    Ok(Dataset::new(name, columns, num_rows))
}

/// Read a dataset from CSV bytes.
pub fn read_csv_from_bytes(data: &[u8], name: &str) -> Result<Dataset, ReportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let (headers, records) = parse_csv_records(&mut rdr)?;
    if headers.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let num_rows = records.len();
    let columns = build_columns(&headers, &records);

    Ok(Dataset::new(name, columns, num_rows))
}
