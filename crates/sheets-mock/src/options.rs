//! Request options

use std::fmt;

use serde::{Deserialize, Serialize};

pub use sheets_mock_core::ValueInputOption;

/// Ordering of a value matrix
///
/// Only [`MajorDimension::Rows`] is implemented; requests asking for columns fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    /// Outer list is rows, inner list is columns
    #[default]
    Rows,
    /// Outer list is columns, inner list is rows
    Columns,
}

impl MajorDimension {
    /// Wire name of the dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            MajorDimension::Rows => "ROWS",
            MajorDimension::Columns => "COLUMNS",
        }
    }
}

impl fmt::Display for MajorDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an append does to the rows below its insertion point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsertDataOption {
    /// Replace the rows at the insertion point
    #[default]
    Overwrite,
    /// Push existing rows down to make room
    InsertRows,
}

/// Options for appending values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendOptions {
    /// How incoming strings are interpreted (default: RAW)
    #[serde(default)]
    pub value_input_option: ValueInputOption,
    /// Insert or overwrite (default: OVERWRITE)
    #[serde(default)]
    pub insert_data_option: InsertDataOption,
}

impl AppendOptions {
    /// Append by inserting new rows
    pub fn insert_rows() -> Self {
        Self {
            insert_data_option: InsertDataOption::InsertRows,
            ..Self::default()
        }
    }

    /// Append by overwriting the rows at the insertion point
    pub fn overwrite() -> Self {
        Self::default()
    }

    /// Set the value input option
    pub fn with_value_input_option(mut self, option: ValueInputOption) -> Self {
        self.value_input_option = option;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(MajorDimension::Columns).unwrap(),
            serde_json::json!("COLUMNS")
        );
        assert_eq!(
            serde_json::to_value(InsertDataOption::InsertRows).unwrap(),
            serde_json::json!("INSERT_ROWS")
        );
        assert_eq!(
            serde_json::to_value(ValueInputOption::UserEntered).unwrap(),
            serde_json::json!("USER_ENTERED")
        );
        assert_eq!(MajorDimension::Rows.to_string(), "ROWS");
    }

    #[test]
    fn test_append_options_defaults() {
        let options: AppendOptions = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(options, AppendOptions::overwrite());

        let options: AppendOptions =
            serde_json::from_value(serde_json::json!({ "insertDataOption": "INSERT_ROWS" }))
                .unwrap();
        assert_eq!(options, AppendOptions::insert_rows());
    }
}
