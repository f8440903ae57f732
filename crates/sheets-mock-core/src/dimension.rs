//! Row and column metadata

use serde::{Deserialize, Serialize};

/// Default row height in pixels
pub const DEFAULT_ROW_PIXEL_SIZE: u32 = 21;

/// Default column width in pixels
pub const DEFAULT_COLUMN_PIXEL_SIZE: u32 = 100;

/// Metadata for one row or one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    /// Height (rows) or width (columns) in pixels
    pub pixel_size: u32,
    /// Hidden by the user
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden_by_user: bool,
    /// Hidden by a filter
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden_by_filter: bool,
}

impl DimensionProperties {
    /// Metadata for a fresh row
    pub fn row() -> Self {
        Self::with_pixel_size(DEFAULT_ROW_PIXEL_SIZE)
    }

    /// Metadata for a fresh column
    pub fn column() -> Self {
        Self::with_pixel_size(DEFAULT_COLUMN_PIXEL_SIZE)
    }

    /// Visible dimension of the given size
    pub fn with_pixel_size(pixel_size: u32) -> Self {
        Self {
            pixel_size,
            hidden_by_user: false,
            hidden_by_filter: false,
        }
    }

    /// Check if the row or column is hidden for any reason
    pub fn is_hidden(&self) -> bool {
        self.hidden_by_user || self.hidden_by_filter
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
