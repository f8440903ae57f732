//! Grid storage
//!
//! A sheet's cells are held densely: every row carries one [`CellData`] per
//! column, created up front. Row and column metadata run parallel to the rows
//! and to each row's cells.
//!
//! Invariants kept by every mutation:
//! - each row has exactly `column_metadata.len()` cells
//! - `row_data.len() == row_metadata.len()`

use serde::Serialize;

use crate::cell::{CellData, RowData};
use crate::dimension::DimensionProperties;
use crate::error::{Error, Result};

/// The cell grid backing one sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    /// First row covered by this grid (always 0, one grid per sheet)
    start_row: u32,
    /// First column covered by this grid (always 0)
    start_column: u32,
    /// Rows in order
    row_data: Vec<RowData>,
    /// Per-row metadata, parallel to `row_data`
    row_metadata: Vec<DimensionProperties>,
    /// Per-column metadata, parallel to each row's cells
    column_metadata: Vec<DimensionProperties>,
}

impl Grid {
    /// Create a grid fully populated with empty cells
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            start_row: 0,
            start_column: 0,
            row_data: (0..rows).map(|_| RowData::empty(cols)).collect(),
            row_metadata: (0..rows).map(|_| DimensionProperties::row()).collect(),
            column_metadata: (0..cols).map(|_| DimensionProperties::column()).collect(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.row_data.len() as u32
    }

    /// Number of columns
    pub fn column_count(&self) -> u32 {
        self.column_metadata.len() as u32
    }

    /// Create a row of empty cells as wide as this grid
    pub fn empty_row(&self) -> RowData {
        RowData::empty(self.column_count())
    }

    /// Get a cell; `None` if the row or column does not exist
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&CellData> {
        self.row_data
            .get(row as usize)
            .and_then(|r| r.cell(col))
    }

    /// Get a mutable cell; `None` if the row or column does not exist
    pub fn cell_at_mut(&mut self, row: u32, col: u32) -> Option<&mut CellData> {
        self.row_data
            .get_mut(row as usize)
            .and_then(|r| r.cell_mut(col))
    }

    /// All rows in order
    pub fn rows(&self) -> &[RowData] {
        &self.row_data
    }

    /// Per-row metadata
    pub fn row_metadata(&self) -> &[DimensionProperties] {
        &self.row_metadata
    }

    /// Per-column metadata
    pub fn column_metadata(&self) -> &[DimensionProperties] {
        &self.column_metadata
    }

    /// Remove `remove_count` rows at `at` and insert `new_rows` in their place
    ///
    /// The removal is clamped to the rows that exist, so splicing at the end
    /// simply appends. `metadata` must supply one entry per new row and every
    /// new row must be exactly as wide as the grid. Returns the removed rows.
    pub fn splice_rows(
        &mut self,
        at: u32,
        new_rows: Vec<RowData>,
        metadata: Vec<DimensionProperties>,
        remove_count: u32,
    ) -> Result<Vec<RowData>> {
        let start = at as usize;
        if start > self.row_data.len() {
            return Err(Error::CellNotFound { row: at, col: 0 });
        }

        if metadata.len() != new_rows.len() {
            return Err(Error::InvalidRange(format!(
                "{} rows given with {} metadata entries",
                new_rows.len(),
                metadata.len()
            )));
        }

        let width = self.column_metadata.len();
        if let Some(row) = new_rows.iter().find(|r| r.len() != width) {
            return Err(Error::InvalidRange(format!(
                "row has {} cells but the grid has {} columns",
                row.len(),
                width
            )));
        }

        let end = start
            .saturating_add(remove_count as usize)
            .min(self.row_data.len());
        self.row_metadata.splice(start..end, metadata);
        Ok(self.row_data.splice(start..end, new_rows).collect())
    }
}
