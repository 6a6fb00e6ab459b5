//! Calendar field definitions.
//!
//! Each [`CalendarField`] fixes the value range of one calendar component and
//! therefore the width, column order and labels of its dummy matrix.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;

/// Three-letter month abbreviations, January first.
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter weekday abbreviations, Monday first.
pub const WEEKDAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Calendar components that can be dummy encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    /// Month of the year (1-12)
    Month,

    /// ISO 8601 week of the year (1-53)
    WeekOfYear,

    /// Ordinal day of the year (1-366)
    DayOfYear,

    /// Day of the month (1-31)
    DayOfMonth,

    /// Day of the week, Monday = 0 (0-6)
    Weekday,

    /// Quarter of the year (1-4)
    Quarter,

    /// Hour of the day (0-23)
    Hour,

    /// Minute of the hour (0-59)
    Minute,
}

/// Label of a single dummy column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnLabel {
    /// The field's native value, e.g. `13` for hour 13.
    Numeric(u32),

    /// A symbolic abbreviation, e.g. `"Jan"` or `"Sat"`.
    Abbrev(&'static str),
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Abbrev(s) => f.write_str(s),
        }
    }
}

impl CalendarField {
    /// Returns all calendar fields in canonical order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Month,
            Self::WeekOfYear,
            Self::DayOfYear,
            Self::DayOfMonth,
            Self::Weekday,
            Self::Quarter,
            Self::Hour,
            Self::Minute,
        ]
    }

    /// Returns the snake_case field name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::WeekOfYear => "week_of_year",
            Self::DayOfYear => "day_of_year",
            Self::DayOfMonth => "day_of_month",
            Self::Weekday => "weekday",
            Self::Quarter => "quarter",
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }

    /// Number of dummy columns, i.e. the field cardinality.
    pub const fn width(&self) -> usize {
        match self {
            Self::Month => 12,
            Self::WeekOfYear => 53,
            Self::DayOfYear => 366,
            Self::DayOfMonth => 31,
            Self::Weekday => 7,
            Self::Quarter => 4,
            Self::Hour => 24,
            Self::Minute => 60,
        }
    }

    /// Smallest native value of the field, mapped to column 0.
    pub const fn origin(&self) -> u32 {
        match self {
            Self::Weekday | Self::Hour | Self::Minute => 0,
            _ => 1,
        }
    }

    /// Whether columns carry symbolic abbreviations instead of numbers.
    pub const fn is_symbolic(&self) -> bool {
        matches!(self, Self::Month | Self::Weekday)
    }

    /// Read the native field value from a timestamp.
    pub fn extract(&self, ts: &NaiveDateTime) -> u32 {
        match self {
            Self::Month => ts.month(),
            Self::WeekOfYear => ts.iso_week().week(),
            Self::DayOfYear => ts.ordinal(),
            Self::DayOfMonth => ts.day(),
            Self::Weekday => ts.weekday().num_days_from_monday(),
            Self::Quarter => (ts.month() - 1) / 3 + 1,
            Self::Hour => ts.hour(),
            Self::Minute => ts.minute(),
        }
    }

    /// Column index for a native value, or `None` when out of range.
    pub fn column_for(&self, value: u32) -> Option<usize> {
        value
            .checked_sub(self.origin())
            .map(|offset| offset as usize)
            .filter(|&idx| idx < self.width())
    }

    /// Native value held by a column index.
    pub fn value_for(&self, index: usize) -> Option<u32> {
        (index < self.width()).then(|| self.origin() + index as u32)
    }

    /// Label of the column at `index`.
    pub fn label(&self, index: usize) -> Option<ColumnLabel> {
        if index >= self.width() {
            return None;
        }
        let label = match self {
            Self::Month => ColumnLabel::Abbrev(MONTH_ABBR[index]),
            Self::Weekday => ColumnLabel::Abbrev(WEEKDAY_ABBR[index]),
            _ => ColumnLabel::Numeric(self.origin() + index as u32),
        };
        Some(label)
    }

    /// Labels of every column, in column order.
    pub fn labels(&self) -> Vec<ColumnLabel> {
        (0..self.width()).filter_map(|i| self.label(i)).collect()
    }

    /// Output column names, `"{prefix}_{label}"` or bare labels.
    pub fn column_names(&self, prefix: Option<&str>) -> Vec<String> {
        self.labels()
            .into_iter()
            .map(|label| match prefix {
                Some(p) => format!("{p}_{label}"),
                None => label.to_string(),
            })
            .collect()
    }

    /// Resolve a column from its label text.
    ///
    /// Abbreviations match case-insensitively. Numeric text is read as the
    /// native field value, so `"1"` resolves to `Jan` for [`Self::Month`].
    pub fn column_for_label(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        if let Ok(value) = label.parse::<u32>() {
            return self.column_for(value);
        }
        let abbrevs: &[&str] = match self {
            Self::Month => &MONTH_ABBR,
            Self::Weekday => &WEEKDAY_ABBR,
            _ => return None,
        };
        abbrevs.iter().position(|a| a.eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarField {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "month" => Ok(Self::Month),
            "week_of_year" | "weekofyear" | "week" => Ok(Self::WeekOfYear),
            "day_of_year" | "dayofyear" | "ordinal" => Ok(Self::DayOfYear),
            "day_of_month" | "dayofmonth" | "day" => Ok(Self::DayOfMonth),
            "weekday" | "day_of_week" | "dayofweek" => Ok(Self::Weekday),
            "quarter" => Ok(Self::Quarter),
            "hour" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            _ => Err(EncodeError::InvalidInput(format!(
                "unknown calendar field '{s}'"
            ))),
        }
    }
}
