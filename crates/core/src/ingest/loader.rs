use crate::domain::indicators::{NUMERIC_COLUMNS, REQUIRED_COLUMNS};
use crate::domain::series::TimeSeriesTable;
use crate::error::DataLoadError;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// "." is how FRED marks a missing observation.
const MISSING_MARKERS: [&str; 7] = ["", ".", "NaN", "nan", "NA", "N/A", "null"];

/// Loads the indicator CSV and checks that the scoring columns are present.
pub fn load_indicator_table(path: impl AsRef<Path>) -> Result<TimeSeriesTable, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file, &NUMERIC_COLUMNS)?;
    table.require_columns(&REQUIRED_COLUMNS)?;

    if !table.is_strictly_increasing() {
        tracing::warn!(
            path = %path.display(),
            "index is not strictly increasing; rows are kept in file order"
        );
    }

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        latest_date = ?table.latest_date(),
        "loaded indicator table"
    );
    Ok(table)
}

/// Reads a CSV whose first column is a date index and whose remaining
/// columns are numeric.
///
/// A bad cell in a `strict` column fails the load. Any other column holding a
/// non-numeric cell is dropped from the table.
pub fn read_table<R: Read>(reader: R, strict: &[&str]) -> Result<TimeSeriesTable, DataLoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let names = match headers.split_first() {
        Some((_index, names)) => names.to_vec(),
        None => return Err(DataLoadError::MissingIndex),
    };

    let mut dates = Vec::new();
    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); names.len()];
    // First offending row per dropped column.
    let mut dropped: Vec<Option<usize>> = vec![None; names.len()];

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let row = i + 2;

        let raw_date = record.get(0).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| DataLoadError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;
        dates.push(date);

        for (j, name) in names.iter().enumerate() {
            if dropped[j].is_some() {
                continue;
            }
            let raw = record.get(j + 1).unwrap_or_default();
            match parse_value(raw) {
                Some(value) => values[j].push(value),
                None if strict.contains(&name.as_str()) => {
                    return Err(DataLoadError::InvalidValue {
                        row,
                        column: name.clone(),
                        value: raw.to_string(),
                    });
                }
                None => dropped[j] = Some(row),
            }
        }
    }

    if dates.is_empty() {
        return Err(DataLoadError::Empty);
    }

    let mut columns = Vec::with_capacity(names.len());
    for ((name, column), dropped_at) in names.into_iter().zip(values).zip(dropped) {
        match dropped_at {
            Some(row) => tracing::warn!(column = %name, row, "skipping non-numeric column"),
            None => columns.push((name, column)),
        }
    }

    Ok(TimeSeriesTable::new(dates, columns))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// `Some(None)` for a missing cell, `None` when the cell is not a number.
fn parse_value(s: &str) -> Option<Option<f64>> {
    if MISSING_MARKERS.contains(&s) {
        return Some(None);
    }
    let v = s.parse::<f64>().ok()?;
    Some((!v.is_nan()).then_some(v))
}
