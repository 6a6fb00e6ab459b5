//! Calendar dummy encoding of a CSV timestamp column.
//!
//! Parses the selected column, encodes every configured field and lays the
//! dummy columns out after the (optionally kept) input columns.

use kalends::{DummyConfig, DummyMatrix, encode_fields, parse_timestamps};
use serde_json::{Value, json};
use std::io::Write;
use tracing::info;

use super::csv_io::TimestampTable;
use super::error::CliError;

/// Encoded output of one CSV table.
#[derive(Debug)]
pub(crate) struct EncodedTable<'a> {
    table: &'a TimestampTable,
    matrices: Vec<DummyMatrix>,
    config: &'a DummyConfig,
    keep_columns: bool,
}

impl<'a> EncodedTable<'a> {
    /// Encode the timestamp column of `table` with `config`.
    pub(crate) fn new(
        table: &'a TimestampTable,
        config: &'a DummyConfig,
        keep_columns: bool,
    ) -> Result<Self, CliError> {
        config.validate()?;
        let timestamps = parse_timestamps(table.timestamp_values())?;
        let matrices = encode_fields(&config.fields, &timestamps)?;

        info!(
            rows = timestamps.len(),
            fields = matrices.len(),
            width = config.total_width(),
            "encoded timestamp column"
        );

        Ok(Self {
            table,
            matrices,
            config,
            keep_columns,
        })
    }

    /// Output header: kept input columns, then dummy columns.
    pub(crate) fn header(&self) -> Vec<String> {
        let mut header = if self.keep_columns {
            self.table.headers.clone()
        } else {
            Vec::new()
        };
        header.extend(self.config.column_names());
        header
    }

    fn dummy_row(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        self.matrices
            .iter()
            .filter_map(move |m| m.row(row))
            .flat_map(|values| values.to_vec())
    }

    fn kept_row(&self, row: usize) -> Vec<&str> {
        if self.keep_columns {
            self.table.records[row].iter().collect()
        } else {
            Vec::new()
        }
    }

    /// Write as headed CSV.
    pub(crate) fn write_csv<W: Write>(&self, writer: W) -> Result<(), CliError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.header())?;

        for row in 0..self.table.len() {
            let mut record: Vec<String> =
                self.kept_row(row).into_iter().map(str::to_string).collect();
            record.extend(self.dummy_row(row).map(|v| v.to_string()));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Render as `{"columns": [...], "rows": [[...], ...]}`.
    pub(crate) fn to_json(&self) -> Value {
        let rows: Vec<Value> = (0..self.table.len())
            .map(|row| {
                let mut values: Vec<Value> =
                    self.kept_row(row).into_iter().map(Value::from).collect();
                values.extend(self.dummy_row(row).map(Value::from));
                Value::Array(values)
            })
            .collect();

        json!({
            "columns": self.header(),
            "rows": rows,
        })
    }
}
