//! Cell reference and coordinate types

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::MAX_COLUMNS;

/// A resolved, zero-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0 ... Z=25)
    pub col: u32,
}

impl GridCoord {
    /// Create a new coordinate
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Format as A1-style string
    ///
    /// Fails for columns past `Z`, which have no single-letter name.
    pub fn to_a1_string(&self) -> Result<String> {
        let letter = column_to_letter(self.col)?;
        Ok(format!("{}{}", letter, self.row as u64 + 1))
    }
}

/// One side of a range expression: a cell, a whole row or a whole column
///
/// `B3` sets both fields, `3` only the row and `B` only the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Row index (0-based), unset for a whole-column reference
    pub row: Option<u32>,
    /// Column index (0-based), unset for a whole-row reference
    pub col: Option<u32>,
}

impl CellRef {
    /// Create a reference to an exact cell
    pub fn cell(row: u32, col: u32) -> Self {
        Self {
            row: Some(row),
            col: Some(col),
        }
    }

    /// Create a whole-row reference
    pub fn row(row: u32) -> Self {
        Self {
            row: Some(row),
            col: None,
        }
    }

    /// Create a whole-column reference
    pub fn column(col: u32) -> Self {
        Self {
            row: None,
            col: Some(col),
        }
    }

    /// Parse a cell reference: one optional column letter followed by optional row digits
    ///
    /// # Examples
    /// ```
    /// use sheets_mock_core::CellRef;
    ///
    /// let r = CellRef::parse("C12").unwrap();
    /// assert_eq!(r.row, Some(11));
    /// assert_eq!(r.col, Some(2));
    ///
    /// assert_eq!(CellRef::parse("7").unwrap(), CellRef::row(6));
    /// assert_eq!(CellRef::parse("D").unwrap(), CellRef::column(3));
    /// assert!(CellRef::parse("AA1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_range("empty cell reference"));
        }

        let mut chars = s.chars();
        let (col, digits) = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => (Some(letter_to_column(c)?), chars.as_str()),
            _ => (None, s),
        };

        if digits.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidRange(format!(
                "only single-letter columns are supported in '{}'",
                s
            )));
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidRange(format!("invalid cell reference '{}'", s)));
        }

        let row = if digits.is_empty() {
            None
        } else {
            let row: u32 = digits
                .parse()
                .map_err(|_| Error::InvalidRange(format!("invalid row number in '{}'", s)))?;

            // A1 rows are 1-based, we use 0-based internally
            if row == 0 {
                return Err(Error::InvalidRange(format!(
                    "row number must be >= 1 in '{}'",
                    s
                )));
            }
            Some(row - 1)
        };

        Ok(Self { row, col })
    }

    /// Check if this reference names an exact cell
    pub fn is_cell(&self) -> bool {
        self.row.is_some() && self.col.is_some()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(col) = self.col {
            let letter = column_to_letter(col).map_err(|_| fmt::Error)?;
            write!(f, "{}", letter)?;
        }
        if let Some(row) = self.row {
            write!(f, "{}", row as u64 + 1)?;
        }
        Ok(())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert a column letter to its index (A = 0 ... Z = 25), case-insensitively
pub fn letter_to_column(letter: char) -> Result<u32> {
    if !letter.is_ascii_alphabetic() {
        return Err(Error::InvalidRange(format!(
            "invalid column letter '{}'",
            letter
        )));
    }
    Ok(letter.to_ascii_uppercase() as u32 - 'A' as u32)
}

/// Convert a column index to its letter (0 = A ... 25 = Z)
pub fn column_to_letter(col: u32) -> Result<char> {
    if col >= MAX_COLUMNS {
        return Err(Error::InvalidRange(format!(
            "column index {} has no single-letter name",
            col
        )));
    }
    Ok((b'A' + col as u8) as char)
}
