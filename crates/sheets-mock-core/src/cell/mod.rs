//! Cell-related types and utilities
//!
//! This module contains:
//! - [`ExtendedValue`] - The tagged value stored in a cell
//! - [`CellData`] and [`RowData`] - A cell and a row of cells as they appear in a grid
//! - [`CellRef`] and [`GridCoord`] - A1 cell references and resolved coordinates
//! - [`codec`] - Conversion between tagged values and plain JSON scalars

mod address;
pub mod codec;
mod value;

pub use address::{column_to_letter, letter_to_column, CellRef, GridCoord};
pub use codec::ValueInputOption;
pub use value::{CellData, ExtendedValue, RowData};
