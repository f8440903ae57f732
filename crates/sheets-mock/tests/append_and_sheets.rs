//! Tests for appends and sheet management

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sheets_mock::prelude::*;

fn seeded() -> SheetsMock {
    let mut mock = SheetsMock::with_config(MockConfig::default().with_sheet("Data")).unwrap();
    mock.update_values(
        "Data!A1:B3",
        ValueInputOption::Raw,
        ValueRange::rows(vec![
            vec![json!("h1"), json!("h2")],
            vec![json!(1), json!(2)],
            vec![json!(3), json!(4)],
        ]),
    )
    .unwrap();
    mock
}

fn row_count(mock: &SheetsMock) -> u32 {
    mock.spreadsheet().sheet(0).unwrap().row_count()
}

/// INSERT_ROWS grows the grid by N and keeps earlier rows
#[test]
fn test_append_insert_rows() {
    let mut mock = seeded();
    let before = mock.get_value_range("Data!A1:B2").unwrap().values;

    let response = mock
        .append_values(
            "Data!A1:B1",
            AppendOptions::insert_rows(),
            ValueRange::rows(vec![vec![json!("new1")], vec![json!("new2"), json!(true)]]),
        )
        .unwrap();

    assert_eq!(row_count(&mock), 102);
    assert_eq!(response.table_range.as_deref(), Some("Data!A1:B1"));
    assert_eq!(response.updates.updated_range, "Data!A2:A3");
    assert_eq!(response.updates.updated_rows, 2);

    // Row 1 untouched; old rows 2 and 3 pushed down
    assert_eq!(mock.get_value_range("Data!A1:B1").unwrap().values, before[..1].to_vec());
    assert_eq!(
        mock.get_value_range("Data!A2:B5").unwrap().values,
        vec![
            vec![json!("new1"), Value::Null],
            vec![json!("new2"), json!(true)],
            vec![json!(1), json!(2)],
            vec![json!(3), json!(4)],
        ]
    );

    let grid = mock.spreadsheet().sheet(0).unwrap().grid();
    assert_eq!(grid.row_metadata().len(), 102);
}

/// OVERWRITE replaces the rows at the insertion point
#[test]
fn test_append_overwrite() {
    let mut mock = seeded();

    mock.append_values(
        "Data!A1:B1",
        AppendOptions::overwrite(),
        ValueRange::rows(vec![vec![json!("x")]]),
    )
    .unwrap();

    assert_eq!(row_count(&mock), 100);
    assert_eq!(
        mock.get_value_range("Data!A2:B3").unwrap().values,
        vec![vec![json!("x"), Value::Null], vec![json!(3), json!(4)]]
    );
}

/// OVERWRITE grows the grid only by the rows past its end
#[test]
fn test_append_overwrite_at_end() {
    let mut mock = seeded();

    let response = mock
        .append_values(
            "Data!A99",
            AppendOptions::overwrite(),
            ValueRange::rows(vec![vec![json!(1)], vec![json!(2)], vec![json!(3)]]),
        )
        .unwrap();

    assert_eq!(response.updates.updated_range, "Data!A100:A102");
    assert_eq!(row_count(&mock), 102);
    assert_eq!(mock.cell("Data!A102").unwrap(), Some(json!(3)));
}

/// Appending below a whole column lands past the last row
#[test]
fn test_append_to_whole_column() {
    let mut mock = seeded();

    let response = mock
        .append_values(
            "Data!A:A",
            AppendOptions::insert_rows(),
            ValueRange::rows(vec![vec![json!("tail")]]),
        )
        .unwrap();

    assert_eq!(response.table_range.as_deref(), Some("Data!A1:A100"));
    assert_eq!(response.updates.updated_range, "Data!A101:A101");
    assert_eq!(mock.cell("Data!A101").unwrap(), Some(json!("tail")));
}

/// A failed append leaves the grid unchanged
#[test]
fn test_append_failure_is_atomic() {
    let mut mock = seeded();
    let before = mock.get_spreadsheet();

    let err = mock
        .append_values(
            "Data!A1",
            AppendOptions::insert_rows(),
            ValueRange::rows(vec![vec![json!(1)], vec![json!({ "nested": true })]]),
        )
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedValueType("object")));
    assert_eq!(mock.get_spreadsheet(), before);
}

/// New sheets get the next id and the default geometry
#[test]
fn test_add_sheet() {
    let mut mock = seeded();

    let properties = mock.add_sheet("Sheet2").unwrap();
    assert_eq!(properties.sheet_id, 1);
    assert_eq!(properties.index, 1);

    let snapshot = mock.get_spreadsheet();
    assert_eq!(snapshot.sheet_count(), 2);
    let sheet = snapshot.sheet_by_title("Sheet2").unwrap();
    assert_eq!(sheet.row_count(), 100);
    assert_eq!(sheet.column_count(), 26);
    assert_eq!(sheet.grid().row_count(), 100);
}

/// Duplicate titles are rejected
#[test]
fn test_add_duplicate_sheet() {
    let mut mock = seeded();
    assert!(matches!(
        mock.add_sheet("data"),
        Err(Error::DuplicateSheetTitle(_))
    ));
}

/// Batch update adds sheets and skips unknown request kinds
#[test]
fn test_batch_update() {
    let mut mock = seeded();
    let request: BatchUpdateSpreadsheetRequest = serde_json::from_value(json!({
        "requests": [
            { "addSheet": { "properties": { "title": "Summary" } } },
            { "deleteSheet": { "sheetId": 0 } },
            { "addSheet": {} }
        ]
    }))
    .unwrap();

    let response = mock.batch_update(request).unwrap();
    assert_eq!(response.replies.len(), 2);

    let first = response.replies[0].add_sheet.as_ref().unwrap();
    assert_eq!(first.properties.title, "Summary");
    assert_eq!(first.properties.sheet_id, 1);

    let second = response.replies[1].add_sheet.as_ref().unwrap();
    assert_eq!(second.properties.title, "Sheet3");

    assert_eq!(response.updated_spreadsheet.sheet_count(), 3);
    assert_eq!(mock.spreadsheet().sheet_count(), 3);
}

/// A failing request rolls back the requests before it
#[test]
fn test_batch_update_is_atomic() {
    let mut mock = seeded();
    let request = BatchUpdateSpreadsheetRequest::new(vec![
        Request::add_sheet("Fresh"),
        Request::add_sheet("Data"),
    ]);

    assert!(matches!(
        mock.batch_update(request),
        Err(Error::DuplicateSheetTitle(_))
    ));
    assert_eq!(mock.spreadsheet().sheet_count(), 1);
}

/// The spreadsheet snapshot has the service's JSON shape
#[test]
fn test_snapshot_json_shape() {
    let mock = SheetsMock::with_config(
        MockConfig::default()
            .with_spreadsheet_id("abc")
            .with_geometry(1, 1)
            .with_sheet("Data"),
    )
    .unwrap();

    let json = serde_json::to_value(mock.get_spreadsheet()).unwrap();
    assert_eq!(json["spreadsheetId"], json!("abc"));
    assert_eq!(json["properties"]["title"], json!("Untitled spreadsheet"));
    assert_eq!(json["sheets"][0]["properties"]["title"], json!("Data"));
    assert_eq!(
        json["sheets"][0]["properties"]["gridProperties"],
        json!({ "rowCount": 1, "columnCount": 1 })
    );
    assert_eq!(json["sheets"][0]["data"][0]["rowData"][0]["values"], json!([{}]));
}
