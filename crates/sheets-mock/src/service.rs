//! The range engine: reads, overwrites, appends and sheet management over
//! one in-memory spreadsheet

use std::collections::BTreeSet;

use serde_json::Value;
use sheets_mock_core::cell::codec;
use sheets_mock_core::{
    a1_from_corners, CellData, DimensionProperties, Error, ExtendedValue, GridCoord, RangeAddress,
    Result, RowData, Sheet, SheetProperties, Spreadsheet,
};

use crate::batch::{
    AddSheetResponse, BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Response,
};
use crate::config::MockConfig;
use crate::options::{AppendOptions, InsertDataOption, MajorDimension, ValueInputOption};
use crate::values::{
    AppendValuesResponse, BatchGetValuesResponse, BatchUpdateValuesRequest,
    BatchUpdateValuesResponse, ClearValuesResponse, UpdateValuesResponse, ValueRange,
};

/// Cell writes validated against a range, ready to apply
struct WritePlan {
    sheet_index: usize,
    writes: Vec<(GridCoord, Option<ExtendedValue>)>,
}

/// An in-memory spreadsheet service
///
/// Every operation either succeeds completely or fails without changing
/// the spreadsheet.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sheets_mock::{SheetsMock, ValueInputOption, ValueRange};
///
/// let mut mock = SheetsMock::new();
/// mock.add_sheet("Data").unwrap();
/// mock.update_values(
///     "Data!A1:B1",
///     ValueInputOption::Raw,
///     ValueRange::rows(vec![vec![json!(1), json!("x")]]),
/// )
/// .unwrap();
///
/// assert_eq!(mock.cell("Data!B1").unwrap(), Some(json!("x")));
/// ```
#[derive(Debug, Clone)]
pub struct SheetsMock {
    spreadsheet: Spreadsheet,
}

impl Default for SheetsMock {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetsMock {
    /// Create a mock holding an empty spreadsheet with the default configuration
    pub fn new() -> Self {
        let config = MockConfig::default();
        Self::from_spreadsheet(Spreadsheet::with_geometry(
            config.spreadsheet_id,
            config.title,
            config.default_row_count,
            config.default_column_count,
        ))
    }

    /// Create a mock from a configuration, adding its initial sheets
    pub fn with_config(config: MockConfig) -> Result<Self> {
        config.validate()?;

        let mut spreadsheet = Spreadsheet::with_geometry(
            config.spreadsheet_id,
            config.title,
            config.default_row_count,
            config.default_column_count,
        );
        for title in &config.initial_sheets {
            spreadsheet.add_sheet(title)?;
        }

        tracing::debug!(
            "Created spreadsheet {} with {} sheet(s)",
            spreadsheet.spreadsheet_id(),
            spreadsheet.sheet_count()
        );
        Ok(Self::from_spreadsheet(spreadsheet))
    }

    /// Wrap an existing spreadsheet
    pub fn from_spreadsheet(spreadsheet: Spreadsheet) -> Self {
        Self { spreadsheet }
    }

    /// Get the spreadsheet id
    pub fn spreadsheet_id(&self) -> &str {
        self.spreadsheet.spreadsheet_id()
    }

    /// Borrow the current spreadsheet
    pub fn spreadsheet(&self) -> &Spreadsheet {
        &self.spreadsheet
    }

    /// Snapshot of the whole spreadsheet, including grid data
    pub fn get_spreadsheet(&self) -> Spreadsheet {
        self.spreadsheet.clone()
    }

    /// Consume the mock, returning the spreadsheet
    pub fn into_spreadsheet(self) -> Spreadsheet {
        self.spreadsheet
    }

    // === Sheets ===

    /// Add a sheet with the default geometry
    pub fn add_sheet(&mut self, title: &str) -> Result<SheetProperties> {
        let properties = self.spreadsheet.add_sheet(title)?.clone();
        tracing::info!(
            "Added sheet '{}' (id {})",
            properties.title,
            properties.sheet_id
        );
        Ok(properties)
    }

    /// Apply a batch of spreadsheet requests
    ///
    /// Requests run in order against a staged copy; the copy replaces the
    /// spreadsheet only if every request succeeds. Request kinds other than
    /// `addSheet` are skipped and get no reply.
    pub fn batch_update(
        &mut self,
        request: BatchUpdateSpreadsheetRequest,
    ) -> Result<BatchUpdateSpreadsheetResponse> {
        tracing::debug!("batchUpdate with {} request(s)", request.requests.len());

        let mut staged = self.spreadsheet.clone();
        let mut replies = Vec::new();

        for req in &request.requests {
            match &req.add_sheet {
                Some(add) => {
                    let title = add.properties.title.as_deref().unwrap_or("");
                    let properties = staged.add_sheet(title)?.clone();
                    tracing::info!(
                        "Added sheet '{}' (id {})",
                        properties.title,
                        properties.sheet_id
                    );
                    replies.push(Response {
                        add_sheet: Some(AddSheetResponse { properties }),
                    });
                }
                None => {
                    tracing::warn!("Skipping unsupported batchUpdate request '{}'", req.kind());
                }
            }
        }

        self.spreadsheet = staged;
        Ok(BatchUpdateSpreadsheetResponse {
            spreadsheet_id: self.spreadsheet.spreadsheet_id().to_string(),
            replies,
            updated_spreadsheet: self.spreadsheet.clone(),
        })
    }

    // === Reads ===

    /// Read the values of a range as a row-major matrix
    ///
    /// Empty cells read as `null`. Fails with [`Error::CellNotFound`] if the
    /// range reaches past the grid.
    pub fn get_value_range(&self, range: &str) -> Result<ValueRange> {
        tracing::debug!("get {}", range);
        let address = RangeAddress::resolve(range, &self.spreadsheet)?;
        self.read(&address)
    }

    /// Read several ranges
    ///
    /// Only [`MajorDimension::Rows`] is supported; any other ordering fails
    /// before a range is looked at. One bad range fails the whole batch.
    pub fn batch_get<S: AsRef<str>>(
        &self,
        ranges: &[S],
        major_dimension: Option<MajorDimension>,
    ) -> Result<BatchGetValuesResponse> {
        check_ordering(major_dimension)?;
        tracing::debug!("batchGet {} range(s)", ranges.len());

        let value_ranges = ranges
            .iter()
            .map(|range| self.get_value_range(range.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(BatchGetValuesResponse {
            spreadsheet_id: self.spreadsheet_id().to_string(),
            value_ranges,
        })
    }

    /// Read one cell, `None` if it is empty or has no backing cell
    ///
    /// Only the top-left corner of `range` is looked at.
    pub fn cell(&self, range: &str) -> Result<Option<Value>> {
        let address = RangeAddress::resolve(range, &self.spreadsheet)?;
        let sheet = self.sheet(address.sheet_index)?;
        let value = sheet
            .cell_at(address.start.row, address.start.col)
            .map(|cell| codec::decode(cell.value()))
            .unwrap_or(Value::Null);

        Ok(match value {
            Value::Null => None,
            value => Some(value),
        })
    }

    fn read(&self, address: &RangeAddress) -> Result<ValueRange> {
        let sheet = self.sheet(address.sheet_index)?;
        check_in_grid(sheet, address)?;

        let mut values = Vec::with_capacity(address.row_count() as usize);
        for row in address.start.row..=address.end.row {
            let mut out = Vec::with_capacity(address.column_count() as usize);
            for col in address.start.col..=address.end.col {
                let cell = sheet
                    .cell_at(row, col)
                    .ok_or(Error::CellNotFound { row, col })?;
                out.push(codec::decode(cell.value()));
            }
            values.push(out);
        }

        Ok(ValueRange {
            range: Some(address.to_a1_string(sheet.title())?),
            major_dimension: Some(MajorDimension::Rows),
            values,
        })
    }

    // === Writes ===

    /// Overwrite cells starting at the range's top-left corner
    ///
    /// Every value must land inside the range and the grid. Cells of the
    /// range the matrix does not reach keep their contents.
    pub fn update_values(
        &mut self,
        range: &str,
        value_input_option: ValueInputOption,
        body: ValueRange,
    ) -> Result<UpdateValuesResponse> {
        tracing::debug!("update {} ({})", range, value_input_option.as_str());
        check_ordering(body.major_dimension)?;

        let address = RangeAddress::resolve(range, &self.spreadsheet)?;
        let plan = self.plan_update(&address, &body.values, value_input_option)?;
        let updated_range = address.to_a1_string(self.sheet(address.sheet_index)?.title())?;

        self.apply(plan)?;
        Ok(self.update_response(updated_range, body))
    }

    /// Overwrite several ranges at once
    ///
    /// Every entry is checked before any cell is written.
    pub fn batch_update_values(
        &mut self,
        request: BatchUpdateValuesRequest,
    ) -> Result<BatchUpdateValuesResponse> {
        tracing::debug!("batchUpdate values for {} range(s)", request.data.len());

        let mut staged = Vec::with_capacity(request.data.len());
        for body in request.data {
            check_ordering(body.major_dimension)?;
            let range = body
                .range
                .clone()
                .ok_or_else(|| Error::invalid_range("batch value range has no range"))?;
            let address = RangeAddress::resolve(&range, &self.spreadsheet)?;
            let plan = self.plan_update(&address, &body.values, request.value_input_option)?;
            let updated_range = address.to_a1_string(self.sheet(address.sheet_index)?.title())?;
            staged.push((plan, updated_range, body));
        }

        let mut sheets = BTreeSet::new();
        let mut responses = Vec::with_capacity(staged.len());
        for (plan, updated_range, body) in staged {
            sheets.insert(plan.sheet_index);
            self.apply(plan)?;
            responses.push(self.update_response(updated_range, body));
        }

        Ok(BatchUpdateValuesResponse {
            spreadsheet_id: self.spreadsheet_id().to_string(),
            total_updated_rows: responses.iter().map(|r| r.updated_rows).sum(),
            total_updated_columns: responses.iter().map(|r| r.updated_columns).sum(),
            total_updated_cells: responses.iter().map(|r| r.updated_cells).sum(),
            total_updated_sheets: sheets.len() as u32,
            responses,
        })
    }

    /// Append rows below a range
    ///
    /// The rows go right after the range's last row. With
    /// [`InsertDataOption::InsertRows`] they push later rows down; with
    /// [`InsertDataOption::Overwrite`] they replace the rows they land on and
    /// only grow the grid past its last row.
    pub fn append_values(
        &mut self,
        range: &str,
        options: AppendOptions,
        body: ValueRange,
    ) -> Result<AppendValuesResponse> {
        tracing::debug!("append {} ({:?})", range, options.insert_data_option);
        check_ordering(body.major_dimension)?;

        let address = RangeAddress::resolve(range, &self.spreadsheet)?;
        let sheet = self.sheet(address.sheet_index)?;
        let title = sheet.title().to_string();
        let width = sheet.column_count();

        let at = address
            .end
            .row
            .checked_add(1)
            .ok_or_else(|| Error::invalid_range("append point past the last addressable row"))?;

        let mut rows = Vec::with_capacity(body.values.len());
        for (i, values) in body.values.iter().enumerate() {
            let row = offset(at, i)?;
            if values.len() as u64 > width as u64 {
                return Err(Error::CellNotFound { row, col: width });
            }
            let mut cells = Vec::with_capacity(width as usize);
            for value in values {
                cells.push(CellData::from(codec::encode(value, options.value_input_option)?));
            }
            cells.resize_with(width as usize, CellData::empty);
            rows.push(RowData::new(cells));
        }

        let count = rows.len() as u32;
        let metadata = vec![DimensionProperties::row(); rows.len()];
        let remove_count = match options.insert_data_option {
            InsertDataOption::InsertRows => 0,
            InsertDataOption::Overwrite => count,
        };

        let table_range = address.to_a1_string(&title)?;
        let updated_range = if rows.is_empty() {
            table_range.clone()
        } else {
            let last = offset(at, rows.len() - 1)?;
            a1_from_corners(&title, GridCoord::new(at, 0), GridCoord::new(last, 0))?
        };

        self.sheet_mut(address.sheet_index)?
            .splice_rows(at, rows, metadata, remove_count)?;

        Ok(AppendValuesResponse {
            spreadsheet_id: self.spreadsheet_id().to_string(),
            table_range: Some(table_range),
            updates: self.update_response(updated_range, body),
        })
    }

    /// Empty every cell of a range
    pub fn clear_values(&mut self, range: &str) -> Result<ClearValuesResponse> {
        tracing::debug!("clear {}", range);

        let address = RangeAddress::resolve(range, &self.spreadsheet)?;
        let sheet = self.sheet(address.sheet_index)?;
        check_in_grid(sheet, &address)?;
        let cleared_range = address.to_a1_string(sheet.title())?;

        let writes = address.cells().map(|coord| (coord, None)).collect();
        self.apply(WritePlan {
            sheet_index: address.sheet_index,
            writes,
        })?;

        Ok(ClearValuesResponse {
            spreadsheet_id: self.spreadsheet_id().to_string(),
            cleared_range,
        })
    }

    // === Internals ===

    fn sheet(&self, index: usize) -> Result<&Sheet> {
        self.spreadsheet
            .sheet(index)
            .ok_or_else(|| Error::SheetNotFound(format!("index {}", index)))
    }

    fn sheet_mut(&mut self, index: usize) -> Result<&mut Sheet> {
        self.spreadsheet
            .sheet_mut(index)
            .ok_or_else(|| Error::SheetNotFound(format!("index {}", index)))
    }

    /// Encode a value matrix and check every target cell, without writing
    fn plan_update(
        &self,
        address: &RangeAddress,
        values: &[Vec<Value>],
        option: ValueInputOption,
    ) -> Result<WritePlan> {
        let sheet = self.sheet(address.sheet_index)?;
        check_in_grid(sheet, address)?;
        let mut writes = Vec::new();

        for (r, row_values) in values.iter().enumerate() {
            let row = offset(address.start.row, r)?;
            for (c, value) in row_values.iter().enumerate() {
                let col = offset(address.start.col, c)?;
                let coord = GridCoord::new(row, col);
                if !address.contains(coord) {
                    return Err(Error::InvalidRange(format!(
                        "value at row {}, column {} lies outside {}",
                        r + 1,
                        c + 1,
                        address.to_a1_string(sheet.title())?
                    )));
                }
                if sheet.cell_at(row, col).is_none() {
                    return Err(Error::CellNotFound { row, col });
                }
                writes.push((coord, codec::encode(value, option)?));
            }
        }

        Ok(WritePlan {
            sheet_index: address.sheet_index,
            writes,
        })
    }

    fn apply(&mut self, plan: WritePlan) -> Result<()> {
        let sheet = self.sheet_mut(plan.sheet_index)?;
        for (coord, value) in plan.writes {
            let cell = sheet
                .cell_at_mut(coord.row, coord.col)
                .ok_or(Error::CellNotFound {
                    row: coord.row,
                    col: coord.col,
                })?;
            cell.set_value(value);
        }
        Ok(())
    }

    fn update_response(&self, updated_range: String, body: ValueRange) -> UpdateValuesResponse {
        let rows = body.row_count();
        let columns = body.first_row_len();
        UpdateValuesResponse {
            spreadsheet_id: self.spreadsheet_id().to_string(),
            updated_range,
            updated_rows: rows,
            updated_columns: columns,
            updated_cells: rows.saturating_mul(columns),
            updated_data: body,
        }
    }
}

fn check_ordering(major_dimension: Option<MajorDimension>) -> Result<()> {
    match major_dimension {
        None | Some(MajorDimension::Rows) => Ok(()),
        Some(other) => Err(Error::UnsupportedOrdering(other.to_string())),
    }
}

/// Fail with the first coordinate (row-major) of `address` that lies outside the grid
fn check_in_grid(sheet: &Sheet, address: &RangeAddress) -> Result<()> {
    let (rows, cols) = (sheet.row_count(), sheet.column_count());
    let (start, end) = (address.start, address.end);

    if start.row >= rows {
        return Err(Error::CellNotFound {
            row: start.row,
            col: start.col,
        });
    }
    if end.col >= cols {
        return Err(Error::CellNotFound {
            row: start.row,
            col: start.col.max(cols),
        });
    }
    if end.row >= rows {
        return Err(Error::CellNotFound {
            row: rows,
            col: start.col,
        });
    }
    Ok(())
}

fn offset(base: u32, delta: usize) -> Result<u32> {
    u32::try_from(delta)
        .ok()
        .and_then(|d| base.checked_add(d))
        .ok_or_else(|| Error::invalid_range("coordinate out of range"))
}
