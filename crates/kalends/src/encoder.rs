//! Calendar dummy encoders.
//!
//! A single table-driven [`encode`] does the work for every field; the
//! `encode_<field>` functions are thin wrappers over it.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{EncodeError, Result};
use crate::field::CalendarField;
use crate::matrix::DummyMatrix;

/// Encode one calendar field of `timestamps` as a one-hot matrix.
///
/// The result has one row per timestamp and exactly `field.width()` columns.
/// Fails with [`EncodeError::InvalidInput`] if any extracted value falls
/// outside the field range; no partial matrix is returned.
pub fn encode(field: CalendarField, timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    let mut matrix = DummyMatrix::zeros(field, timestamps.len());

    for (row, ts) in timestamps.iter().enumerate() {
        let value = field.extract(ts);
        let column = field.column_for(value).ok_or_else(|| {
            EncodeError::invalid_row(row, format!("{field} value {value} out of range"))
        })?;
        matrix.set(row, column);
    }

    debug!(
        field = field.name(),
        rows = matrix.nrows(),
        width = matrix.ncols(),
        "encoded calendar dummies"
    );

    Ok(matrix)
}

/// Like [`encode`], for inputs that may contain missing timestamps.
///
/// Any `None` entry fails the whole call with [`EncodeError::InvalidInput`].
pub fn encode_optional(
    field: CalendarField,
    timestamps: &[Option<NaiveDateTime>],
) -> Result<DummyMatrix> {
    let present = timestamps
        .iter()
        .enumerate()
        .map(|(row, ts)| ts.ok_or_else(|| EncodeError::invalid_row(row, "missing timestamp")))
        .collect::<Result<Vec<_>>>()?;

    encode(field, &present)
}

/// Encode several fields of the same timestamps, in the order given.
pub fn encode_fields(
    fields: &[CalendarField],
    timestamps: &[NaiveDateTime],
) -> Result<Vec<DummyMatrix>> {
    fields.iter().map(|&field| encode(field, timestamps)).collect()
}

/// Month dummies: 12 columns labelled `Jan` .. `Dec`.
pub fn encode_month(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::Month, timestamps)
}

/// ISO week-of-year dummies: 53 columns labelled 1 .. 53.
pub fn encode_week_of_year(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::WeekOfYear, timestamps)
}

/// Day-of-year dummies: 366 columns labelled 1 .. 366.
pub fn encode_day_of_year(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::DayOfYear, timestamps)
}

/// Day-of-month dummies: 31 columns labelled 1 .. 31.
pub fn encode_day_of_month(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::DayOfMonth, timestamps)
}

/// Weekday dummies: 7 columns labelled `Mon` .. `Sun`.
pub fn encode_weekday(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::Weekday, timestamps)
}

/// Quarter dummies: 4 columns labelled 1 .. 4.
pub fn encode_quarter(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::Quarter, timestamps)
}

/// Hour dummies: 24 columns labelled 0 .. 23.
pub fn encode_hour(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::Hour, timestamps)
}

/// Minute dummies: 60 columns labelled 0 .. 59.
pub fn encode_minute(timestamps: &[NaiveDateTime]) -> Result<DummyMatrix> {
    encode(CalendarField::Minute, timestamps)
}
