//! Polars integration.
//!
//! Reads a timestamp column out of a [`DataFrame`] and turns it into calendar
//! dummy columns. Accepted dtypes are `Datetime` (any time unit), `Date` and
//! `String`. Timezone-aware `Datetime` columns are read as wall-clock time in
//! their own zone, matching how RFC 3339 strings are parsed.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use polars::prelude::*;
use tracing::debug;

use crate::config::DummyConfig;
use crate::encoder::encode;
use crate::error::{EncodeError, Result};
use crate::field::CalendarField;
use crate::matrix::DummyMatrix;
use crate::parse::parse_timestamp;

/// Zone used to turn stored UTC instants into local calendar fields.
#[derive(Debug, Clone, Copy)]
enum WallClock {
    Utc,
    Named(Tz),
    Fixed(FixedOffset),
}

impl WallClock {
    fn resolve(tz: Option<&str>) -> Result<Self> {
        let Some(tz) = tz else {
            return Ok(Self::Utc);
        };
        if let Ok(named) = tz.parse::<Tz>() {
            return Ok(Self::Named(named));
        }
        tz.parse::<FixedOffset>().map(Self::Fixed).map_err(|_| {
            EncodeError::InvalidInput(format!("unknown time zone '{tz}'"))
        })
    }

    fn local(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Utc => instant.naive_utc(),
            Self::Named(tz) => instant.with_timezone(&tz).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
        }
    }
}

fn from_epoch(value: i64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
    }
}

fn from_epoch_days(days: i32) -> Option<NaiveDateTime> {
    DateTime::UNIX_EPOCH
        .date_naive()
        .checked_add_signed(Duration::days(days.into()))
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Convert a series to timestamps.
///
/// Null entries, unparseable strings and unsupported dtypes fail with
/// [`EncodeError::InvalidInput`].
pub fn timestamps_from_series(series: &Series) -> Result<Vec<NaiveDateTime>> {
    let missing = |row: usize| EncodeError::invalid_row(row, "missing timestamp");

    match series.dtype() {
        DataType::Datetime(unit, tz) => {
            let unit = *unit;
            let clock = WallClock::resolve(tz.as_ref().map(|tz| tz.as_str()))?;
            let physical = series.to_physical_repr();
            physical
                .i64()?
                .into_iter()
                .enumerate()
                .map(|(row, v)| {
                    let v = v.ok_or_else(|| missing(row))?;
                    from_epoch(v, unit)
                        .map(|instant| clock.local(instant))
                        .ok_or_else(|| EncodeError::invalid_row(row, "timestamp out of range"))
                })
                .collect()
        }
        DataType::Date => {
            let physical = series.to_physical_repr();
            physical
                .i32()?
                .into_iter()
                .enumerate()
                .map(|(row, v)| {
                    let v = v.ok_or_else(|| missing(row))?;
                    from_epoch_days(v)
                        .ok_or_else(|| EncodeError::invalid_row(row, "date out of range"))
                })
                .collect()
        }
        DataType::String => series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                let v = v.ok_or_else(|| missing(row))?;
                parse_timestamp(v).map_err(|e| match e {
                    EncodeError::InvalidInput(reason) => EncodeError::invalid_row(row, reason),
                    other => other,
                })
            })
            .collect(),
        other => Err(EncodeError::InvalidInput(format!(
            "column '{}' has dtype {other}, expected a datetime, date or string column",
            series.name()
        ))),
    }
}

/// Encode one calendar field of a series.
pub fn encode_series(field: CalendarField, series: &Series) -> Result<DummyMatrix> {
    let timestamps = timestamps_from_series(series)?;
    encode(field, &timestamps)
}

/// Build the dummy columns for `column` of `df`.
///
/// Returns a frame holding only the dummy columns, one block per configured
/// field, in config order.
pub fn encode_column(df: &DataFrame, column: &str, config: &DummyConfig) -> Result<DataFrame> {
    config.validate()?;

    let series = df.column(column)?.as_materialized_series();
    let timestamps = timestamps_from_series(series)?;

    let mut columns = Vec::with_capacity(config.total_width());
    for &field in &config.fields {
        let matrix = encode(field, &timestamps)?;
        columns.extend(matrix.to_dataframe(config.prefix_for(field))?.take_columns());
    }

    debug!(
        column,
        rows = timestamps.len(),
        fields = config.fields.len(),
        width = columns.len(),
        "built calendar dummy frame"
    );

    Ok(DataFrame::new(columns)?)
}

/// Append the dummy columns for `column` to `df`.
pub fn with_calendar_dummies(
    df: &DataFrame,
    column: &str,
    config: &DummyConfig,
) -> Result<DataFrame> {
    let dummies = encode_column(df, column, config)?;
    let mut columns = df.get_columns().to_vec();
    columns.extend(dummies.take_columns());
    Ok(DataFrame::new(columns)?)
}
