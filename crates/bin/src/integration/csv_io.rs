//! CSV input for the timestamp column.

use csv::StringRecord;
use std::io::Read;

use super::error::CliError;

/// A CSV table with one column selected as the timestamp source.
#[derive(Debug)]
pub(crate) struct TimestampTable {
    pub(crate) headers: Vec<String>,
    pub(crate) records: Vec<StringRecord>,
    column: usize,
}

impl TimestampTable {
    /// Read a headed CSV and locate `column`.
    pub(crate) fn from_reader<R: Read>(reader: R, column: &str) -> Result<Self, CliError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let index = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| CliError::MissingColumn {
                column: column.to_string(),
                available: headers.join(", "),
            })?;

        let records = rdr.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            headers,
            records,
            column: index,
        })
    }

    /// Raw text of the timestamp column, one entry per record.
    pub(crate) fn timestamp_values(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.get(self.column).unwrap_or(""))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
