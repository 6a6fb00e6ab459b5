//! Selection of calendar fields to encode.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{EncodeError, Result};
use crate::field::CalendarField;

/// Configuration for building calendar dummy columns.
///
/// Field ranges and labels are fixed; only which fields are emitted and how
/// the columns are named can be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DummyConfig {
    /// Fields to encode, in output order (default: all eight)
    pub fields: Vec<CalendarField>,
    /// Prefix each column with its field name, e.g. `month_Jan` (default: true)
    pub prefix_columns: bool,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            fields: CalendarField::all(),
            prefix_columns: true,
        }
    }
}

impl DummyConfig {
    /// Config for a given field list with default naming.
    pub fn with_fields(fields: impl Into<Vec<CalendarField>>) -> Self {
        Self {
            fields: fields.into(),
            ..Default::default()
        }
    }

    /// Parse from a JSON string and validate.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read from a JSON file and validate.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject empty or duplicated field lists and colliding column names.
    ///
    /// Without prefixes, numeric fields share labels (`hour` and `minute`
    /// both have a column `"0"`), so such combinations are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(EncodeError::InvalidInput(
                "at least one calendar field is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field) {
                return Err(EncodeError::InvalidInput(format!(
                    "calendar field '{field}' listed twice"
                )));
            }
        }
        let mut names = HashSet::new();
        for (field, name) in self.named_columns() {
            if !names.insert(name.clone()) {
                return Err(EncodeError::InvalidInput(format!(
                    "column name '{name}' of field '{field}' is already used; enable prefix_columns"
                )));
            }
        }
        Ok(())
    }

    fn named_columns(&self) -> impl Iterator<Item = (CalendarField, String)> + '_ {
        self.fields.iter().flat_map(move |&field| {
            field
                .column_names(self.prefix_for(field))
                .into_iter()
                .map(move |name| (field, name))
        })
    }

    /// Names of every dummy column, in output order.
    pub fn column_names(&self) -> Vec<String> {
        self.named_columns().map(|(_, name)| name).collect()
    }

    /// Column name prefix for a field under this config.
    pub const fn prefix_for(&self, field: CalendarField) -> Option<&'static str> {
        if self.prefix_columns {
            Some(field.name())
        } else {
            None
        }
    }

    /// Total number of dummy columns the config produces.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|f| f.width()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DummyConfig::default();
        assert_eq!(config.fields.len(), 8);
        assert!(config.prefix_columns);
        assert_eq!(config.total_width(), 557);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = DummyConfig::from_json_str(r#"{"fields": ["hour", "weekday"]}"#).unwrap();
        assert_eq!(config.fields, vec![CalendarField::Hour, CalendarField::Weekday]);
        assert!(config.prefix_columns);
        assert_eq!(config.prefix_for(CalendarField::Hour), Some("hour"));
    }

    #[test]
    fn test_from_json_no_prefix() {
        let config =
            DummyConfig::from_json_str(r#"{"fields": ["month"], "prefix_columns": false}"#)
                .unwrap();
        assert_eq!(config.prefix_for(CalendarField::Month), None);
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(
            DummyConfig::from_json_str(r#"{"fields": []}"#)
                .unwrap_err()
                .is_invalid_input()
        );
        assert!(
            DummyConfig::with_fields([CalendarField::Month, CalendarField::Month])
                .validate()
                .unwrap_err()
                .is_invalid_input()
        );
    }

    #[test]
    fn test_unprefixed_numeric_fields_collide() {
        let config = DummyConfig {
            prefix_columns: false,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("'1'"));

        let hour_minute = DummyConfig {
            fields: vec![CalendarField::Hour, CalendarField::Minute],
            prefix_columns: false,
        };
        assert!(hour_minute.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_unprefixed_disjoint_labels_allowed() {
        let config = DummyConfig {
            fields: vec![CalendarField::Month, CalendarField::Weekday, CalendarField::Hour],
            prefix_columns: false,
        };
        assert!(config.validate().is_ok());
        let names = config.column_names();
        assert_eq!(names.len(), 12 + 7 + 24);
        assert_eq!(names[0], "Jan");
        assert_eq!(names[12], "Mon");
        assert_eq!(names[19], "0");
    }

    #[test]
    fn test_column_names_prefixed() {
        let names = DummyConfig::default().column_names();
        assert_eq!(names.len(), 557);
        assert_eq!(names[0], "month_Jan");
        assert_eq!(names[names.len() - 1], "minute_59");
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "kalends-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"fields": ["quarter", "month"], "prefix_columns": false}"#)
            .unwrap();
        let loaded = DummyConfig::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.fields, vec![CalendarField::Quarter, CalendarField::Month]);
        assert!(!config.prefix_columns);
    }

    #[test]
    fn test_from_json_file_missing() {
        let path = std::env::temp_dir().join("kalends-config-does-not-exist.json");
        let err = DummyConfig::from_json_file(path).unwrap_err();
        assert!(matches!(err, EncodeError::Io(_)));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = DummyConfig::from_json_str(r#"{"fields": ["fortnight"]}"#).unwrap_err();
        assert!(matches!(err, EncodeError::Serialization(_)));
    }
}
