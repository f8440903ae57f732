//! Spreadsheet type - the sheet registry

use serde::Serialize;

use crate::error::{Error, Result};
use crate::sheet::{Sheet, SheetProperties};
use crate::{DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT};

/// Spreadsheet-level properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadsheetProperties {
    pub title: String,
}

/// A spreadsheet: an identifier, a title and an ordered list of sheets
///
/// Sheets are only ever added, so a sheet's id, its index and its creation
/// order all agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    /// Immutable identifier
    spreadsheet_id: String,
    properties: SpreadsheetProperties,
    sheets: Vec<Sheet>,
    /// Rows in a newly added sheet
    #[serde(skip)]
    default_row_count: u32,
    /// Columns in a newly added sheet
    #[serde(skip)]
    default_column_count: u32,
}

impl Spreadsheet {
    /// Create a spreadsheet with no sheets and the default 100x26 sheet geometry
    pub fn new<I: Into<String>, T: Into<String>>(spreadsheet_id: I, title: T) -> Self {
        Self::with_geometry(spreadsheet_id, title, DEFAULT_ROW_COUNT, DEFAULT_COLUMN_COUNT)
    }

    /// Create a spreadsheet with no sheets whose new sheets get `rows` x `cols` cells
    pub fn with_geometry<I: Into<String>, T: Into<String>>(
        spreadsheet_id: I,
        title: T,
        rows: u32,
        cols: u32,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            properties: SpreadsheetProperties {
                title: title.into(),
            },
            sheets: Vec::new(),
            default_row_count: rows,
            default_column_count: cols,
        }
    }

    /// Get the spreadsheet id
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Get the spreadsheet title
    pub fn title(&self) -> &str {
        &self.properties.title
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the spreadsheet has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by exact title
    pub fn sheet_by_title(&self, title: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.title() == title)
    }

    /// Get the index of a sheet by exact title
    pub fn sheet_index(&self, title: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.title() == title)
    }

    /// Add a sheet with the default geometry
    ///
    /// An empty title is replaced by the first free `SheetN` name. Titles are
    /// unique, compared case-insensitively.
    pub fn add_sheet(&mut self, title: &str) -> Result<&SheetProperties> {
        let title = if title.is_empty() {
            self.generate_sheet_title()
        } else {
            self.validate_sheet_title(title)?;
            title.to_string()
        };

        let id = self.sheets.len() as u32;
        self.sheets.push(Sheet::new(
            id,
            id,
            title,
            self.default_row_count,
            self.default_column_count,
        ));

        let sheet = &self.sheets[id as usize];
        Ok(sheet.properties())
    }

    /// Validate a new sheet title
    fn validate_sheet_title(&self, title: &str) -> Result<()> {
        let lower = title.to_lowercase();
        if self.sheets.iter().any(|s| s.title().to_lowercase() == lower) {
            return Err(Error::DuplicateSheetTitle(title.into()));
        }
        Ok(())
    }

    /// Generate a unique sheet title
    fn generate_sheet_title(&self) -> String {
        let mut n = self.sheets.len() + 1;
        loop {
            let title = format!("Sheet{}", n);
            if self.validate_sheet_title(&title).is_ok() {
                return title;
            }
            n += 1;
        }
    }
}
