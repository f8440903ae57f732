//! Value-range request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::{MajorDimension, ValueInputOption};

/// A range and the values in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// A1 range the values cover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Ordering of `values`; absent means ROWS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<MajorDimension>,
    /// The value matrix: JSON strings, numbers, booleans or nulls
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Row-major values with no range attached
    pub fn rows(values: Vec<Vec<Value>>) -> Self {
        Self {
            range: None,
            major_dimension: Some(MajorDimension::Rows),
            values,
        }
    }

    /// Attach a range
    pub fn with_range<S: Into<String>>(mut self, range: S) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Number of value rows
    pub fn row_count(&self) -> u32 {
        self.values.len() as u32
    }

    /// Length of the first value row
    pub fn first_row_len(&self) -> u32 {
        self.values.first().map(|r| r.len() as u32).unwrap_or(0)
    }
}

/// Result of writing one range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    /// A1 range that was written
    pub updated_range: String,
    pub updated_rows: u32,
    pub updated_columns: u32,
    /// Rows times the length of the first row
    pub updated_cells: u32,
    /// The request body, echoed back
    pub updated_data: ValueRange,
}

/// Result of an append
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    pub spreadsheet_id: String,
    /// The range the append was requested against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_range: Option<String>,
    pub updates: UpdateValuesResponse,
}

/// Result of reading several ranges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetValuesResponse {
    pub spreadsheet_id: String,
    pub value_ranges: Vec<ValueRange>,
}

/// Result of clearing a range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearValuesResponse {
    pub spreadsheet_id: String,
    pub cleared_range: String,
}

/// Several ranges to write at once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateValuesRequest {
    #[serde(default)]
    pub value_input_option: ValueInputOption,
    /// Each entry must carry its `range`
    #[serde(default)]
    pub data: Vec<ValueRange>,
}

/// Result of writing several ranges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateValuesResponse {
    pub spreadsheet_id: String,
    pub total_updated_rows: u32,
    pub total_updated_columns: u32,
    pub total_updated_cells: u32,
    /// Number of distinct sheets written
    pub total_updated_sheets: u32,
    pub responses: Vec<UpdateValuesResponse>,
}
