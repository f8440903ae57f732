//! Range expressions and resolved range addresses
//!
//! A range expression is `[SheetName!]CellRef[:CellRef]`, where the sheet
//! name may be wrapped in single quotes. Parsing happens in two steps:
//! [`RangeExpr::parse`] splits the text without looking at any sheet, then
//! [`RangeExpr::resolve`] picks the sheet and fills omitted bounds from its
//! size, giving a [`RangeAddress`].

use crate::cell::{column_to_letter, CellRef, GridCoord};
use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::spreadsheet::Spreadsheet;

/// A parsed but unresolved range expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeExpr {
    /// Sheet qualifier with quotes removed; `None` means the first sheet
    pub sheet: Option<String>,
    /// Top-left reference
    pub start: CellRef,
    /// Bottom-right reference (equal to `start` when only one was given)
    pub end: CellRef,
}

impl RangeExpr {
    /// Parse a range expression
    ///
    /// # Examples
    /// ```
    /// use sheets_mock_core::{CellRef, RangeExpr};
    ///
    /// let expr = RangeExpr::parse("'My Sheet'!B2:C").unwrap();
    /// assert_eq!(expr.sheet.as_deref(), Some("My Sheet"));
    /// assert_eq!(expr.start, CellRef::cell(1, 1));
    /// assert_eq!(expr.end, CellRef::column(2));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_range("empty range expression"));
        }

        let (sheet, cells) = match s.rfind('!') {
            Some(pos) => (Some(unquote_sheet_title(&s[..pos])?), &s[pos + 1..]),
            None => (None, s),
        };

        if cells.is_empty() {
            return Err(Error::InvalidRange(format!("no cell reference in '{}'", s)));
        }

        let mut parts = cells.split(':');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(Error::InvalidRange(format!("too many ':' in '{}'", s)));
        }

        if first.is_empty() {
            return Err(Error::InvalidRange(format!("missing top-left cell in '{}'", s)));
        }

        let start = CellRef::parse(first)?;
        let end = match second {
            Some(text) if !text.is_empty() => CellRef::parse(text)?,
            _ => start,
        };

        Ok(Self { sheet, start, end })
    }

    /// Resolve against a spreadsheet: pick the sheet and fill omitted bounds
    pub fn resolve(&self, spreadsheet: &Spreadsheet) -> Result<RangeAddress> {
        let sheet_index = match &self.sheet {
            Some(title) => spreadsheet
                .sheet_index(title)
                .ok_or_else(|| Error::SheetNotFound(title.clone()))?,
            None => {
                if spreadsheet.is_empty() {
                    return Err(Error::SheetNotFound(
                        "spreadsheet has no sheets".into(),
                    ));
                }
                0
            }
        };

        let sheet = spreadsheet
            .sheet(sheet_index)
            .ok_or_else(|| Error::SheetNotFound(format!("index {}", sheet_index)))?;
        let last_row = sheet.row_count().saturating_sub(1);
        let last_col = sheet.column_count().saturating_sub(1);

        let start = GridCoord::new(self.start.row.unwrap_or(0), self.start.col.unwrap_or(0));
        let end = GridCoord::new(
            self.end.row.unwrap_or(last_row),
            self.end.col.unwrap_or(last_col),
        );

        Ok(RangeAddress::new(sheet_index, start, end))
    }
}

/// A range resolved to concrete, zero-based, inclusive corners of one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeAddress {
    /// Index of the sheet in its spreadsheet
    pub sheet_index: usize,
    /// Top-left corner
    pub start: GridCoord,
    /// Bottom-right corner
    pub end: GridCoord,
}

impl RangeAddress {
    /// Create a range address
    pub fn new(sheet_index: usize, start: GridCoord, end: GridCoord) -> Self {
        // Normalize so start is top-left and end is bottom-right
        Self {
            sheet_index,
            start: GridCoord::new(start.row.min(end.row), start.col.min(end.col)),
            end: GridCoord::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Address covering every cell of a sheet
    pub fn whole_sheet(sheet_index: usize, sheet: &Sheet) -> Self {
        Self::new(
            sheet_index,
            GridCoord::new(0, 0),
            GridCoord::new(
                sheet.row_count().saturating_sub(1),
                sheet.column_count().saturating_sub(1),
            ),
        )
    }

    /// Parse and resolve a range expression in one step
    ///
    /// Besides the A1 grammar, a bare sheet title (`Data` or `'My Sheet'`)
    /// names that whole sheet when it is not itself a valid cell reference.
    pub fn resolve(expr: &str, spreadsheet: &Spreadsheet) -> Result<Self> {
        match RangeExpr::parse(expr) {
            Ok(parsed) => parsed.resolve(spreadsheet),
            Err(err) => {
                let text = expr.trim();
                if text.is_empty() || text.contains('!') {
                    return Err(err);
                }
                let title = unquote_sheet_title(text)?;
                match spreadsheet.sheet_index(&title) {
                    Some(index) => match spreadsheet.sheet(index) {
                        Some(sheet) => Ok(Self::whole_sheet(index, sheet)),
                        None => Err(err),
                    },
                    None => Err(err),
                }
            }
        }
    }

    /// Number of rows covered
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns covered
    pub fn column_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Total number of cells covered
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.column_count() as u64
    }

    /// Check if a coordinate lies inside the range
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= self.start.row
            && coord.row <= self.end.row
            && coord.col >= self.start.col
            && coord.col <= self.end.col
    }

    /// Iterate over all coordinates in the range (row by row)
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let (start, end) = (self.start, self.end);
        (start.row..=end.row)
            .flat_map(move |row| (start.col..=end.col).map(move |col| GridCoord::new(row, col)))
    }

    /// Format as `Title!A1:B2` (or `Title!A1` for a single cell)
    pub fn to_a1_string(&self, title: &str) -> Result<String> {
        let mut out = quote_sheet_title(title);
        out.push('!');
        out.push_str(&self.start.to_a1_string()?);
        if self.start != self.end {
            out.push(':');
            out.push_str(&self.end.to_a1_string()?);
        }
        Ok(out)
    }
}

/// Build `Title!<Col><Row>:<Col><Row>` from two corners, rows 1-based
///
/// Always emits both corners, even when they coincide.
pub fn a1_from_corners(title: &str, start: GridCoord, end: GridCoord) -> Result<String> {
    Ok(format!(
        "{}!{}{}:{}{}",
        quote_sheet_title(title),
        column_to_letter(start.col)?,
        start.row as u64 + 1,
        column_to_letter(end.col)?,
        end.row as u64 + 1
    ))
}

/// Quote a sheet title for use in a range expression if it contains a space
/// or a quote; embedded quotes are doubled.
pub fn quote_sheet_title(title: &str) -> String {
    if title.contains(' ') || title.contains('\'') {
        format!("'{}'", title.replace('\'', "''"))
    } else {
        title.to_string()
    }
}

/// Strip surrounding single quotes from a sheet title, undoubling inner quotes
fn unquote_sheet_title(s: &str) -> Result<String> {
    let title = if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        s[1..s.len() - 1].replace("''", "'")
    } else {
        s.to_string()
    };

    if title.is_empty() {
        return Err(Error::invalid_range("empty sheet name"));
    }
    Ok(title)
}
