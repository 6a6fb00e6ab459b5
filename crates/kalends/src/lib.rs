#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/kalends/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod encoder;
pub mod error;
pub mod field;
pub mod frame;
pub mod matrix;
pub mod parse;

// Re-export common types
pub use config::DummyConfig;
pub use encoder::{
    encode, encode_day_of_month, encode_day_of_year, encode_fields, encode_hour, encode_minute,
    encode_month, encode_optional, encode_quarter, encode_week_of_year, encode_weekday,
};
pub use error::{EncodeError, Result};
pub use field::{CalendarField, ColumnLabel};
pub use frame::{encode_column, encode_series, timestamps_from_series, with_calendar_dummies};
pub use matrix::DummyMatrix;
pub use parse::{parse_timestamp, parse_timestamps};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
