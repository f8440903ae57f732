//! Scenario files: a JSON array of operations replayed against one mock

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use sheets_mock::{
    AppendOptions, BatchUpdateSpreadsheetRequest, InsertDataOption, MajorDimension, Request,
    SheetsMock, ValueInputOption, ValueRange,
};

/// One step of a scenario, tagged by `op`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Operation {
    /// Add a sheet; an empty title gets a generated name
    AddSheet {
        #[serde(default)]
        title: String,
    },
    /// Read one range
    GetValues { range: String },
    /// Read several ranges
    #[serde(rename_all = "camelCase")]
    BatchGet {
        ranges: Vec<String>,
        #[serde(default)]
        major_dimension: Option<MajorDimension>,
    },
    /// Overwrite a range
    #[serde(rename_all = "camelCase")]
    UpdateValues {
        range: String,
        #[serde(default)]
        value_input_option: ValueInputOption,
        #[serde(default)]
        major_dimension: Option<MajorDimension>,
        values: Vec<Vec<Value>>,
    },
    /// Append rows below a range
    #[serde(rename_all = "camelCase")]
    AppendValues {
        range: String,
        #[serde(default)]
        value_input_option: ValueInputOption,
        #[serde(default)]
        insert_data_option: InsertDataOption,
        values: Vec<Vec<Value>>,
    },
    /// Empty a range
    ClearValues { range: String },
    /// Apply spreadsheet requests
    BatchUpdate { requests: Vec<Request> },
    /// Snapshot the whole spreadsheet
    GetSpreadsheet,
    /// Read one cell
    Cell { range: String },
}

impl Operation {
    /// Short description used in error context
    pub fn describe(&self) -> String {
        match self {
            Operation::AddSheet { title } => format!("addSheet '{}'", title),
            Operation::GetValues { range } => format!("getValues {}", range),
            Operation::BatchGet { ranges, .. } => format!("batchGet {}", ranges.join(", ")),
            Operation::UpdateValues { range, .. } => format!("updateValues {}", range),
            Operation::AppendValues { range, .. } => format!("appendValues {}", range),
            Operation::ClearValues { range } => format!("clearValues {}", range),
            Operation::BatchUpdate { requests } => {
                format!("batchUpdate ({} requests)", requests.len())
            }
            Operation::GetSpreadsheet => "getSpreadsheet".to_string(),
            Operation::Cell { range } => format!("cell {}", range),
        }
    }

    /// Run the operation, returning its response as JSON
    pub fn apply(&self, mock: &mut SheetsMock) -> Result<Value> {
        let value = match self {
            Operation::AddSheet { title } => serde_json::to_value(mock.add_sheet(title)?)?,
            Operation::GetValues { range } => serde_json::to_value(mock.get_value_range(range)?)?,
            Operation::BatchGet {
                ranges,
                major_dimension,
            } => serde_json::to_value(mock.batch_get(ranges.as_slice(), *major_dimension)?)?,
            Operation::UpdateValues {
                range,
                value_input_option,
                major_dimension,
                values,
            } => {
                let body = ValueRange {
                    range: Some(range.clone()),
                    major_dimension: *major_dimension,
                    values: values.clone(),
                };
                serde_json::to_value(mock.update_values(range, *value_input_option, body)?)?
            }
            Operation::AppendValues {
                range,
                value_input_option,
                insert_data_option,
                values,
            } => {
                let options = AppendOptions {
                    value_input_option: *value_input_option,
                    insert_data_option: *insert_data_option,
                };
                let body = ValueRange::rows(values.clone()).with_range(range.clone());
                serde_json::to_value(mock.append_values(range, options, body)?)?
            }
            Operation::ClearValues { range } => serde_json::to_value(mock.clear_values(range)?)?,
            Operation::BatchUpdate { requests } => {
                let request = BatchUpdateSpreadsheetRequest::new(requests.clone());
                serde_json::to_value(mock.batch_update(request)?)?
            }
            Operation::GetSpreadsheet => serde_json::to_value(mock.get_spreadsheet())?,
            Operation::Cell { range } => serde_json::to_value(mock.cell(range)?)?,
        };
        Ok(value)
    }
}

/// Load a scenario file
pub fn load(path: &Path) -> Result<Vec<Operation>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scenario '{}'", path.display()))
}

/// Run operations in order, writing each result as pretty JSON
///
/// Stops at the first failing operation.
pub fn run<W: Write>(operations: &[Operation], mock: &mut SheetsMock, out: &mut W) -> Result<usize> {
    for (i, operation) in operations.iter().enumerate() {
        tracing::debug!("Step {}: {}", i + 1, operation.describe());
        let result = operation
            .apply(mock)
            .with_context(|| format!("Step {} ({}) failed", i + 1, operation.describe()))?;
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    }
    Ok(operations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> Vec<Operation> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_operations() {
        let ops = parse(json!([
            { "op": "addSheet", "title": "Data" },
            { "op": "updateValues", "range": "Data!A1", "valueInputOption": "USER_ENTERED", "values": [["=1"]] },
            { "op": "appendValues", "range": "Data!A1", "insertDataOption": "INSERT_ROWS", "values": [[1]] },
            { "op": "getSpreadsheet" }
        ]));

        assert_eq!(ops.len(), 4);
        assert_eq!(
            ops[0],
            Operation::AddSheet {
                title: "Data".into()
            }
        );
        assert!(matches!(
            ops[1],
            Operation::UpdateValues {
                value_input_option: ValueInputOption::UserEntered,
                ..
            }
        ));
        assert!(matches!(
            ops[2],
            Operation::AppendValues {
                insert_data_option: InsertDataOption::InsertRows,
                ..
            }
        ));
        assert_eq!(ops[3], Operation::GetSpreadsheet);
    }

    #[test]
    fn test_run_scenario() {
        let ops = parse(json!([
            { "op": "addSheet", "title": "Data" },
            { "op": "updateValues", "range": "Data!A1:B2", "values": [[1, "x"], [2, "y"]] },
            { "op": "getValues", "range": "Data!A1:B2" },
            { "op": "cell", "range": "Data!A1" }
        ]));

        let mut mock = SheetsMock::new();
        let mut out = Vec::new();
        assert_eq!(run(&ops, &mut mock, &mut out).unwrap(), 4);

        let text = String::from_utf8(out).unwrap();
        let docs: Vec<Value> = serde_json::Deserializer::from_str(&text)
            .into_iter::<Value>()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[2]["values"], json!([[1, "x"], [2, "y"]]));
        assert_eq!(docs[3], json!(1));
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let ops = parse(json!([
            { "op": "addSheet", "title": "Data" },
            { "op": "getValues", "range": "Missing!A1" },
            { "op": "addSheet", "title": "Never" }
        ]));

        let mut mock = SheetsMock::new();
        let mut out = Vec::new();
        let err = run(&ops, &mut mock, &mut out).unwrap_err();

        assert!(err.to_string().contains("Step 2"));
        assert_eq!(mock.spreadsheet().sheet_count(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "op": "addSheet" }}, {{ "op": "batchGet", "ranges": ["A1"] }}]"#)
            .unwrap();

        let ops = load(file.path()).unwrap();
        assert_eq!(ops[0], Operation::AddSheet { title: String::new() });
        assert!(matches!(ops[1], Operation::BatchGet { major_dimension: None, .. }));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "op": "explode" }}]"#).unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario"));
    }
}
