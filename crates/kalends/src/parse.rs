//! Timestamp parsing from text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EncodeError, Result};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse a single timestamp.
///
/// RFC 3339 values keep the wall-clock time as written. Date-only values are
/// taken at midnight; time-only values are anchored on 1970-01-01.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EncodeError::InvalidInput("empty timestamp".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(dt);
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Some(time) = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
    {
        return Ok(DateTime::UNIX_EPOCH.date_naive().and_time(time));
    }

    Err(EncodeError::InvalidInput(format!(
        "unparseable timestamp '{value}'"
    )))
}

/// Parse a sequence of timestamps, failing on the first bad entry.
pub fn parse_timestamps<I, S>(values: I) -> Result<Vec<NaiveDateTime>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            parse_timestamp(v.as_ref()).map_err(|e| match e {
                EncodeError::InvalidInput(reason) => EncodeError::invalid_row(row, reason),
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    #[rstest]
    #[case("2000-01-01", 2000, 1, 1, 0, 0)]
    #[case("2000/01/02", 2000, 1, 2, 0, 0)]
    #[case("2021-06-15 08:30:00", 2021, 6, 15, 8, 30)]
    #[case("2021-06-15T08:30:00.250", 2021, 6, 15, 8, 30)]
    #[case("2021-06-15 08:30", 2021, 6, 15, 8, 30)]
    #[case("2021-06-15T23:59:00+05:00", 2021, 6, 15, 23, 59)]
    #[case("  2021-06-15  ", 2021, 6, 15, 0, 0)]
    #[case("13:01:00", 1970, 1, 1, 13, 1)]
    #[case("13:02", 1970, 1, 1, 13, 2)]
    fn test_parse_timestamp(
        #[case] input: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
    ) {
        let ts = parse_timestamp(input).unwrap();
        assert_eq!(
            (ts.year(), ts.month(), ts.day(), ts.hour(), ts.minute()),
            (year, month, day, hour, minute)
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("not a date")]
    #[case("2000-13-01")]
    #[case("25:00:00")]
    fn test_parse_timestamp_rejects(#[case] input: &str) {
        assert!(parse_timestamp(input).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_parse_timestamps_names_row() {
        let err = parse_timestamps(["2000-01-01", "garbage"]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_parse_timestamps_owned_strings() {
        let values = vec!["2000-01-01".to_string(), "2000-01-02".to_string()];
        let parsed = parse_timestamps(&values).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].day(), 2);
    }
}
