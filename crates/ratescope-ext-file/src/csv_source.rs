//! CSV rate history source.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use ratescope_core::{
    Date, RateHistorySource, RateRecord, ScopeResult, DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMAT,
    DEFAULT_RATE_COLUMN,
};

use crate::error::SourceError;

/// Rate history read from a CSV file with a header row.
///
/// Columns are found by header name; any other columns are ignored. Rows
/// may appear in any order and are returned ascending by date.
#[derive(Debug, Clone)]
pub struct CsvRateHistorySource {
    file_path: PathBuf,
    date_column: String,
    rate_column: String,
    date_format: String,
}

impl CsvRateHistorySource {
    /// Create a new CSV source reading `Date Changed` and `Rate` columns
    /// with dates like `07 Aug 25`.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            rate_column: DEFAULT_RATE_COLUMN.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Use different column headers.
    #[must_use]
    pub fn with_columns(mut self, date: impl Into<String>, rate: impl Into<String>) -> Self {
        self.date_column = date.into();
        self.rate_column = rate.into();
        self
    }

    /// Use a different `strftime` date format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Path of the file being read.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read and parse the file.
    pub fn read(&self) -> Result<Vec<RateRecord>, SourceError> {
        let file = File::open(&self.file_path).map_err(|source| SourceError::Io {
            path: self.file_path.clone(),
            source,
        })?;
        let records = self.read_from(file)?;
        info!(
            path = %self.file_path.display(),
            records = records.len(),
            "loaded rate history"
        );
        Ok(records)
    }

    /// Parse CSV text from any reader.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<RateRecord>, SourceError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| SourceError::parse(1, e.to_string()))?
            .clone();
        let date_idx = column_index(&headers, &self.date_column)?;
        let rate_idx = column_index(&headers, &self.rate_column)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| {
                let line = e.position().map_or(0, csv::Position::line);
                SourceError::parse(line, e.to_string())
            })?;
            let line = row.position().map_or(0, csv::Position::line);

            if row.iter().all(str::is_empty) {
                continue;
            }

            let date_text = row.get(date_idx).unwrap_or_default();
            let date = Date::parse_with_format(date_text, &self.date_format).map_err(|_| {
                SourceError::parse(
                    line,
                    format!("bad date '{date_text}' for format '{}'", self.date_format),
                )
            })?;

            let rate_text = row.get(rate_idx).unwrap_or_default();
            let rate = rate_text
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite())
                .ok_or_else(|| SourceError::parse(line, format!("bad rate '{rate_text}'")))?;

            records.push(RateRecord::new(date, rate));
        }

        records.sort_by_key(|r| r.date);
        debug!(records = records.len(), "parsed rate history");
        Ok(records)
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, SourceError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| SourceError::MissingColumn {
            column: column.to_string(),
            found: headers.iter().map(str::to_string).collect(),
        })
}

impl RateHistorySource for CsvRateHistorySource {
    fn load(&self) -> ScopeResult<Vec<RateRecord>> {
        Ok(self.read()?)
    }

    fn describe(&self) -> String {
        format!("csv file {}", self.file_path.display())
    }
}
