//! Convenient re-exports
//!
//! ```rust
//! use sheets_mock::prelude::*;
//! ```

pub use crate::batch::{BatchUpdateSpreadsheetRequest, Request};
pub use crate::config::MockConfig;
pub use crate::options::{AppendOptions, InsertDataOption, MajorDimension, ValueInputOption};
pub use crate::service::SheetsMock;
pub use crate::shared::SharedSheetsMock;
pub use crate::values::{BatchUpdateValuesRequest, ValueRange};
pub use sheets_mock_core::{Error, Result};
