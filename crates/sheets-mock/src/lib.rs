//! # sheets-mock
//!
//! An in-memory stand-in for a spreadsheet values service, for exercising
//! spreadsheet clients in tests without a network.
//!
//! One [`SheetsMock`] holds one spreadsheet. It supports:
//! - reading ranges in A1 notation ([`SheetsMock::get_value_range`], [`SheetsMock::batch_get`])
//! - overwriting, appending and clearing values
//! - adding sheets directly or through [`SheetsMock::batch_update`]
//!
//! Only row-major value matrices are supported and formulas are stored as
//! text, never evaluated.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use sheets_mock::prelude::*;
//!
//! let mut mock = SheetsMock::new();
//! mock.add_sheet("Data")?;
//!
//! mock.update_values(
//!     "Data!A1:B2",
//!     ValueInputOption::Raw,
//!     ValueRange::rows(vec![vec![json!(1), json!("x")], vec![json!(2), json!("y")]]),
//! )?;
//!
//! let read = mock.get_value_range("Data!A1:B2")?;
//! assert_eq!(read.values, vec![vec![json!(1), json!("x")], vec![json!(2), json!("y")]]);
//!
//! mock.append_values(
//!     "Data!A1:B2",
//!     AppendOptions::insert_rows(),
//!     ValueRange::rows(vec![vec![json!(3), json!("z")]]),
//! )?;
//! assert_eq!(mock.cell("Data!B3")?, Some(json!("z")));
//! # Ok::<(), sheets_mock::Error>(())
//! ```

pub mod batch;
pub mod config;
pub mod options;
pub mod prelude;
pub mod service;
pub mod shared;
pub mod values;

pub use batch::{
    AddSheetRequest, AddSheetResponse, BatchUpdateSpreadsheetRequest,
    BatchUpdateSpreadsheetResponse, NewSheetProperties, Request, Response,
};
pub use config::MockConfig;
pub use options::{AppendOptions, InsertDataOption, MajorDimension, ValueInputOption};
pub use service::SheetsMock;
pub use shared::SharedSheetsMock;
pub use values::{
    AppendValuesResponse, BatchGetValuesResponse, BatchUpdateValuesRequest,
    BatchUpdateValuesResponse, ClearValuesResponse, UpdateValuesResponse, ValueRange,
};

// Core types used in requests and responses
pub use sheets_mock_core::{
    Error, ExtendedValue, GridProperties, RangeAddress, Result, Sheet, SheetProperties,
    Spreadsheet,
};
