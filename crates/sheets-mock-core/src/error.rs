//! Error types for sheets-mock-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by range parsing and grid operations.
///
/// Every error fails the whole call that raised it; nothing is partially applied.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or empty range expression
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Sheet qualifier does not name an existing sheet
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Resolved coordinate has no backing cell
    #[error("No cell at row {row}, column {col}")]
    CellNotFound { row: u32, col: u32 },

    /// A major dimension other than ROWS was requested
    #[error("Unsupported major dimension {0}: only ROWS is supported")]
    UnsupportedOrdering(String),

    /// Incoming value is not a string, number, boolean or null
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(&'static str),

    /// Another sheet already uses this title
    #[error("Sheet title already exists: {0}")]
    DuplicateSheetTitle(String),

    /// Mock configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an invalid range error with a message
    pub fn invalid_range<S: Into<String>>(msg: S) -> Self {
        Error::InvalidRange(msg.into())
    }
}
