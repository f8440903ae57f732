//! # sheets-mock-core
//!
//! Core data structures for the sheets-mock in-memory spreadsheet service.
//!
//! This crate provides the pieces the range engine is built from:
//! - [`ExtendedValue`] and the [`cell::codec`] - tagged cell values and their JSON scalar form
//! - [`CellRef`], [`GridCoord`] and [`RangeAddress`] - A1 notation parsing and formatting
//! - [`Grid`] - dense row-major cell storage with row/column metadata
//! - [`Spreadsheet`], [`Sheet`] - the sheet registry of one spreadsheet
//!
//! ## Example
//!
//! ```rust
//! use sheets_mock_core::{RangeAddress, Spreadsheet};
//!
//! let mut spreadsheet = Spreadsheet::new("abc123", "Budget");
//! spreadsheet.add_sheet("Data").unwrap();
//!
//! let address = RangeAddress::resolve("Data!A:A", &spreadsheet).unwrap();
//! assert_eq!(address.start.row, 0);
//! assert_eq!(address.end.row, 99);
//! assert_eq!(address.end.col, 0);
//! ```

pub mod cell;
pub mod dimension;
pub mod error;
pub mod grid;
pub mod range;
pub mod sheet;
pub mod spreadsheet;

// Re-exports for convenience
pub use cell::{CellData, CellRef, ExtendedValue, GridCoord, RowData, ValueInputOption};
pub use dimension::DimensionProperties;
pub use error::{Error, Result};
pub use grid::Grid;
pub use range::{a1_from_corners, quote_sheet_title, RangeAddress, RangeExpr};
pub use sheet::{GridProperties, Sheet, SheetProperties, SheetType};
pub use spreadsheet::{Spreadsheet, SpreadsheetProperties};

/// Number of rows in a newly added sheet
pub const DEFAULT_ROW_COUNT: u32 = 100;

/// Number of columns in a newly added sheet
pub const DEFAULT_COLUMN_COUNT: u32 = 26;

/// Columns addressable in A1 notation. Only single-letter columns (A-Z) are supported.
pub const MAX_COLUMNS: u32 = 26;
