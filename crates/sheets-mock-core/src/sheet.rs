//! Sheet type

use serde::{Deserialize, Serialize, Serializer};

use crate::cell::{CellData, RowData};
use crate::dimension::DimensionProperties;
use crate::error::Result;
use crate::grid::Grid;

/// Kind of sheet. Only grid sheets are modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SheetType {
    #[default]
    Grid,
}

/// Size of a sheet's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    pub row_count: u32,
    pub column_count: u32,
}

/// Properties describing a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// Sheet id: the 0-based creation index, never reused
    pub sheet_id: u32,
    /// Sheet title, unique within the spreadsheet
    pub title: String,
    /// Position among the spreadsheet's sheets
    pub index: u32,
    #[serde(default)]
    pub sheet_type: SheetType,
    pub grid_properties: GridProperties,
}

/// A sheet (single tab of a spreadsheet) and its grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    properties: SheetProperties,
    /// The one grid data block, serialized as the service's `data` array
    #[serde(rename = "data", serialize_with = "serialize_as_data")]
    grid: Grid,
}

impl Sheet {
    /// Create a sheet with an empty `rows` x `cols` grid
    pub fn new<S: Into<String>>(sheet_id: u32, index: u32, title: S, rows: u32, cols: u32) -> Self {
        Self {
            properties: SheetProperties {
                sheet_id,
                title: title.into(),
                index,
                sheet_type: SheetType::Grid,
                grid_properties: GridProperties {
                    row_count: rows,
                    column_count: cols,
                },
            },
            grid: Grid::new(rows, cols),
        }
    }

    /// Get the sheet properties
    pub fn properties(&self) -> &SheetProperties {
        &self.properties
    }

    /// Get the sheet id
    pub fn sheet_id(&self) -> u32 {
        self.properties.sheet_id
    }

    /// Get the sheet title
    pub fn title(&self) -> &str {
        &self.properties.title
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.properties.grid_properties.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> u32 {
        self.properties.grid_properties.column_count
    }

    /// Get the backing grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&CellData> {
        self.grid.cell_at(row, col)
    }

    /// Get a mutable cell by row and column indices
    pub fn cell_at_mut(&mut self, row: u32, col: u32) -> Option<&mut CellData> {
        self.grid.cell_at_mut(row, col)
    }

    // === Row Operations ===

    /// Splice rows into the grid, keeping the grid properties in step
    ///
    /// See [`Grid::splice_rows`].
    pub fn splice_rows(
        &mut self,
        at: u32,
        new_rows: Vec<RowData>,
        metadata: Vec<DimensionProperties>,
        remove_count: u32,
    ) -> Result<Vec<RowData>> {
        let removed = self.grid.splice_rows(at, new_rows, metadata, remove_count)?;
        self.properties.grid_properties.row_count = self.grid.row_count();
        Ok(removed)
    }
}

fn serialize_as_data<S: Serializer>(grid: &Grid, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    std::slice::from_ref(grid).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet() {
        let sheet = Sheet::new(3, 3, "Data", 100, 26);
        assert_eq!(sheet.sheet_id(), 3);
        assert_eq!(sheet.title(), "Data");
        assert_eq!(sheet.row_count(), 100);
        assert_eq!(sheet.column_count(), 26);
        assert_eq!(sheet.grid().row_count(), 100);
    }

    #[test]
    fn test_splice_updates_row_count() {
        let mut sheet = Sheet::new(0, 0, "Data", 4, 3);
        let row = sheet.grid().empty_row();
        sheet
            .splice_rows(4, vec![row], vec![DimensionProperties::row()], 0)
            .unwrap();
        assert_eq!(sheet.row_count(), 5);
        assert_eq!(sheet.grid().row_count(), 5);
    }

    #[test]
    fn test_failed_splice_leaves_row_count() {
        let mut sheet = Sheet::new(0, 0, "Data", 4, 3);
        assert!(sheet.splice_rows(9, vec![], vec![], 0).is_err());
        assert_eq!(sheet.row_count(), 4);
    }

    #[test]
    fn test_serialized_shape() {
        let sheet = Sheet::new(0, 0, "Data", 1, 1);
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "properties": {
                    "sheetId": 0,
                    "title": "Data",
                    "index": 0,
                    "sheetType": "GRID",
                    "gridProperties": { "rowCount": 1, "columnCount": 1 }
                },
                "data": [{
                    "startRow": 0,
                    "startColumn": 0,
                    "rowData": [{ "values": [{}] }],
                    "rowMetadata": [{ "pixelSize": 21 }],
                    "columnMetadata": [{ "pixelSize": 100 }]
                }]
            })
        );
    }
}
