//! Spreadsheet batch-update requests and replies
//!
//! A request is an object with a single key naming its kind, e.g.
//! `{"addSheet": {"properties": {"title": "Data"}}}`. Only `addSheet` is
//! understood; any other kind is kept in [`Request::other`] and skipped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sheets_mock_core::{SheetProperties, Spreadsheet};

/// Properties supplied for a new sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSheetProperties {
    /// Title; a `SheetN` name is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Add a sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSheetRequest {
    #[serde(default)]
    pub properties: NewSheetProperties,
}

/// One request of a batch update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetRequest>,
    /// Request kinds this mock does not implement
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Request {
    /// An add-sheet request
    pub fn add_sheet<S: Into<String>>(title: S) -> Self {
        Self {
            add_sheet: Some(AddSheetRequest {
                properties: NewSheetProperties {
                    title: Some(title.into()),
                },
            }),
            other: Map::new(),
        }
    }

    /// Name of the request kind, for logging
    pub fn kind(&self) -> &str {
        if self.add_sheet.is_some() {
            "addSheet"
        } else {
            self.other.keys().next().map(String::as_str).unwrap_or("empty")
        }
    }
}

/// A batch of spreadsheet requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSpreadsheetRequest {
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl BatchUpdateSpreadsheetRequest {
    /// Create a batch from requests
    pub fn new(requests: Vec<Request>) -> Self {
        Self { requests }
    }
}

/// Reply to an add-sheet request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSheetResponse {
    pub properties: SheetProperties,
}

/// Reply to one request of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetResponse>,
}

/// Result of a batch update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSpreadsheetResponse {
    pub spreadsheet_id: String,
    /// One reply per implemented request, in order
    pub replies: Vec<Response>,
    /// The spreadsheet after all requests were applied
    pub updated_spreadsheet: Spreadsheet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_add_sheet() {
        let request: Request =
            serde_json::from_value(json!({ "addSheet": { "properties": { "title": "Data" } } }))
                .unwrap();
        assert_eq!(request, Request::add_sheet("Data"));
        assert_eq!(request.kind(), "addSheet");
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let request: Request =
            serde_json::from_value(json!({ "deleteSheet": { "sheetId": 3 } })).unwrap();
        assert!(request.add_sheet.is_none());
        assert_eq!(request.kind(), "deleteSheet");
    }

    #[test]
    fn test_add_sheet_without_properties() {
        let request: Request = serde_json::from_value(json!({ "addSheet": {} })).unwrap();
        assert_eq!(
            request.add_sheet,
            Some(AddSheetRequest {
                properties: NewSheetProperties { title: None }
            })
        );
    }
}
