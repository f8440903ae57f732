//! Mock configuration

use serde::{Deserialize, Serialize};
use sheets_mock_core::{Error, Result, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, MAX_COLUMNS};

/// Configuration for a [`SheetsMock`](crate::SheetsMock)
///
/// Every field has a default, so a JSON config only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MockConfig {
    /// Spreadsheet id reported in every response (default: "mock-spreadsheet")
    pub spreadsheet_id: String,
    /// Spreadsheet title (default: "Untitled spreadsheet")
    pub title: String,
    /// Rows in a new sheet (default: 100)
    pub default_row_count: u32,
    /// Columns in a new sheet, at most 26 (default: 26)
    pub default_column_count: u32,
    /// Sheets created up front, in order (default: none)
    pub initial_sheets: Vec<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: "mock-spreadsheet".into(),
            title: "Untitled spreadsheet".into(),
            default_row_count: DEFAULT_ROW_COUNT,
            default_column_count: DEFAULT_COLUMN_COUNT,
            initial_sheets: Vec::new(),
        }
    }
}

impl MockConfig {
    /// Set the spreadsheet id
    pub fn with_spreadsheet_id<S: Into<String>>(mut self, id: S) -> Self {
        self.spreadsheet_id = id.into();
        self
    }

    /// Set the geometry of new sheets
    pub fn with_geometry(mut self, rows: u32, cols: u32) -> Self {
        self.default_row_count = rows;
        self.default_column_count = cols;
        self
    }

    /// Add a sheet to create up front
    pub fn with_sheet<S: Into<String>>(mut self, title: S) -> Self {
        self.initial_sheets.push(title.into());
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.spreadsheet_id.is_empty() {
            return Err(Error::InvalidConfig("spreadsheet id cannot be empty".into()));
        }
        if self.default_row_count == 0 || self.default_column_count == 0 {
            return Err(Error::InvalidConfig(format!(
                "sheet geometry must be non-zero, got {}x{}",
                self.default_row_count, self.default_column_count
            )));
        }
        if self.default_column_count > MAX_COLUMNS {
            return Err(Error::InvalidConfig(format!(
                "at most {} columns are addressable, got {}",
                MAX_COLUMNS, self.default_column_count
            )));
        }
        for (i, title) in self.initial_sheets.iter().enumerate() {
            let lower = title.to_lowercase();
            if self.initial_sheets[..i]
                .iter()
                .any(|other| other.to_lowercase() == lower)
            {
                return Err(Error::InvalidConfig(format!(
                    "initial sheet '{}' is listed twice",
                    title
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MockConfig::default();
        assert_eq!(config.default_row_count, 100);
        assert_eq!(config.default_column_count, 26);
        assert!(config.initial_sheets.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: MockConfig =
            serde_json::from_str(r#"{ "spreadsheetId": "abc", "initialSheets": ["Data"] }"#)
                .unwrap();
        assert_eq!(config.spreadsheet_id, "abc");
        assert_eq!(config.initial_sheets, vec!["Data".to_string()]);
        assert_eq!(config.default_row_count, 100);
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        assert!(MockConfig::default().with_geometry(0, 5).validate().is_err());
        assert!(MockConfig::default().with_geometry(10, 27).validate().is_err());
        assert!(MockConfig::default().with_geometry(10, 26).validate().is_ok());
        assert!(MockConfig::default()
            .with_spreadsheet_id("")
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_initial_sheets() {
        let config = MockConfig::default().with_sheet("Data").with_sheet("data");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
