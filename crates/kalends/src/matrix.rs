//! Fixed-width dummy matrices.

use ndarray::{Array2, ArrayView1, ArrayView2};
use polars::prelude::*;

use crate::error::Result;
use crate::field::{CalendarField, ColumnLabel};

/// N x W indicator matrix for one calendar field.
///
/// Rows follow the input order. Columns always span the full range of the
/// field, even for values that never occur in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyMatrix {
    field: CalendarField,
    data: Array2<u8>,
}

impl DummyMatrix {
    /// All-zero matrix with `rows` rows and the field's full width.
    pub(crate) fn zeros(field: CalendarField, rows: usize) -> Self {
        Self {
            field,
            data: Array2::zeros((rows, field.width())),
        }
    }

    pub(crate) fn set(&mut self, row: usize, column: usize) {
        self.data[[row, column]] = 1;
    }

    /// Encoded calendar field.
    pub const fn field(&self) -> CalendarField {
        self.field
    }

    /// Number of rows (input timestamps).
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns; always equal to the field width.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Column labels in column order.
    pub fn labels(&self) -> Vec<ColumnLabel> {
        self.field.labels()
    }

    /// Cell by position.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.data.get([row, column]).copied()
    }

    /// Cell by column label text, e.g. `"Sat"` or `"13"`.
    pub fn value(&self, row: usize, label: &str) -> Option<u8> {
        self.column_index(label)
            .and_then(|column| self.get(row, column))
    }

    /// Cell by native field value, e.g. month `1` for the `Jan` column.
    pub fn value_at(&self, row: usize, native: u32) -> Option<u8> {
        self.field
            .column_for(native)
            .and_then(|column| self.get(row, column))
    }

    /// Column index of a label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.field.column_for_label(label)
    }

    /// Index of the set column in `row`.
    pub fn hot_column(&self, row: usize) -> Option<usize> {
        self.row(row)?.iter().position(|&v| v == 1)
    }

    /// View of a single row.
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, u8>> {
        (row < self.nrows()).then(|| self.data.row(row))
    }

    /// Whether every row has exactly one cell set to 1 and all others 0.
    pub fn is_one_hot(&self) -> bool {
        self.data.rows().into_iter().all(|row| {
            row.iter().all(|&v| v <= 1) && row.iter().filter(|&&v| v == 1).count() == 1
        })
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// Take the underlying array.
    pub fn into_array(self) -> Array2<u8> {
        self.data
    }

    /// Convert to a DataFrame of `UInt8` columns named by label.
    ///
    /// With a prefix, columns are named `"{prefix}_{label}"`.
    pub fn to_dataframe(&self, prefix: Option<&str>) -> Result<DataFrame> {
        let columns: Vec<Column> = self
            .field
            .column_names(prefix)
            .into_iter()
            .enumerate()
            .map(|(j, name)| Column::new(name.into(), self.data.column(j).to_vec()))
            .collect();

        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DummyMatrix {
        let mut m = DummyMatrix::zeros(CalendarField::Weekday, 2);
        m.set(0, 5);
        m.set(1, 6);
        m
    }

    #[test]
    fn test_shape() {
        let m = sample();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 7);
        assert_eq!(m.field(), CalendarField::Weekday);
    }

    #[test]
    fn test_lookup_by_position_label_and_value() {
        let m = sample();
        assert_eq!(m.get(0, 5), Some(1));
        assert_eq!(m.value(0, "Sat"), Some(1));
        assert_eq!(m.value_at(0, 5), Some(1));
        assert_eq!(m.value(0, "Sun"), Some(0));
        assert_eq!(m.value(0, "Someday"), None);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_hot_column_and_one_hot() {
        let m = sample();
        assert_eq!(m.hot_column(0), Some(5));
        assert_eq!(m.hot_column(1), Some(6));
        assert_eq!(m.hot_column(2), None);
        assert!(m.is_one_hot());

        let empty_row = DummyMatrix::zeros(CalendarField::Quarter, 1);
        assert!(!empty_row.is_one_hot());
    }

    #[test]
    fn test_to_dataframe() {
        let df = sample().to_dataframe(None).unwrap();
        assert_eq!(df.width(), 7);
        assert_eq!(df.height(), 2);
        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        let sat = df
            .column("Sat")
            .unwrap()
            .as_materialized_series()
            .u8()
            .unwrap()
            .clone();
        assert_eq!(sat.get(0), Some(1));
        assert_eq!(sat.get(1), Some(0));
    }

    #[test]
    fn test_to_dataframe_prefixed() {
        let df = sample().to_dataframe(Some("weekday")).unwrap();
        assert!(df.column("weekday_Sun").is_ok());
        assert!(df.column("Sun").is_err());
    }
}
