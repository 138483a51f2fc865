//! Loading historical price series from CSV

use crate::error::{Result, StorageError};
use crate::observations::Observation;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Date format of the month-end price files, e.g. `10/31/20`
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%y";

/// Data loader for price series
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load observations from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P, date_format: &str) -> Result<Vec<Observation>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let observations = Self::from_reader(file, date_format)?;

        debug!(
            path = %path.display(),
            rows = observations.len(),
            "Loaded price observations"
        );

        Ok(observations)
    }

    /// Load observations from any CSV source
    ///
    /// The header must contain a date column and a price column. Rows are
    /// returned sorted by date; duplicate dates are rejected.
    pub fn from_reader<R: Read>(reader: R, date_format: &str) -> Result<Vec<Observation>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let date_idx = Self::detect_column(&headers, "date")?;
        let price_idx = Self::detect_column(&headers, "price")?;

        let mut observations = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            // Header is line 1
            let line = row + 2;

            let date = Self::field(&record, date_idx, line)?;
            let date = NaiveDate::parse_from_str(date, date_format).map_err(|e| {
                StorageError::DataError(format!(
                    "Line {}: cannot parse date '{}' with format '{}': {}",
                    line, date, date_format, e
                ))
            })?;

            let price = Self::field(&record, price_idx, line)?;
            let price = price.parse::<f64>().map_err(|e| {
                StorageError::DataError(format!(
                    "Line {}: cannot parse price '{}': {}",
                    line, price, e
                ))
            })?;

            observations.push(Observation::new(date, price));
        }

        if observations.is_empty() {
            return Err(StorageError::DataError(
                "No price rows found in data".to_string(),
            ));
        }

        observations.sort_by_key(|o| o.date);

        if let Some(pair) = observations.windows(2).find(|p| p[0].date == p[1].date) {
            return Err(StorageError::DataError(format!(
                "Duplicate observation date {}",
                pair[0].date
            )));
        }

        Ok(observations)
    }

    /// Find the first header containing `needle`, case-insensitively
    fn detect_column(headers: &StringRecord, needle: &str) -> Result<usize> {
        headers
            .iter()
            .position(|name| name.to_lowercase().contains(needle))
            .ok_or_else(|| {
                StorageError::DataError(format!("No {} column found in data", needle))
            })
    }

    fn field(record: &StringRecord, idx: usize, line: usize) -> Result<&str> {
        record
            .get(idx)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| StorageError::DataError(format!("Line {}: missing field", line)))
    }
}
