//! Cell value types

use std::fmt;

use serde::{Deserialize, Serialize};

/// The tagged value stored in a cell
///
/// Serializes the way the service spells it on the wire, e.g. `{"numberValue": 3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    /// String value
    StringValue(String),

    /// Numeric value (all numbers are stored as f64)
    NumberValue(f64),

    /// Boolean value
    BoolValue(bool),

    /// Formula text, stored verbatim and never evaluated (e.g. "=SUM(A1:A3)")
    FormulaValue(String),
}

impl ExtendedValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        ExtendedValue::StringValue(s.into())
    }

    /// Create a new formula value
    pub fn formula<S: Into<String>>(text: S) -> Self {
        ExtendedValue::FormulaValue(text.into())
    }

    /// Check if the value is a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, ExtendedValue::FormulaValue(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ExtendedValue::NumberValue(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ExtendedValue::BoolValue(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ExtendedValue::StringValue(s) => Some(s),
            _ => None,
        }
    }

    /// Get the formula text if this is a formula
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            ExtendedValue::FormulaValue(text) => Some(text),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ExtendedValue::StringValue(_) => "string",
            ExtendedValue::NumberValue(_) => "number",
            ExtendedValue::BoolValue(_) => "boolean",
            ExtendedValue::FormulaValue(_) => "formula",
        }
    }
}

impl fmt::Display for ExtendedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedValue::StringValue(s) => write!(f, "{}", s),
            ExtendedValue::NumberValue(n) => write!(f, "{}", n),
            ExtendedValue::BoolValue(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            ExtendedValue::FormulaValue(text) => write!(f, "{}", text),
        }
    }
}

impl From<bool> for ExtendedValue {
    fn from(b: bool) -> Self {
        ExtendedValue::BoolValue(b)
    }
}

impl From<i32> for ExtendedValue {
    fn from(n: i32) -> Self {
        ExtendedValue::NumberValue(n as f64)
    }
}

impl From<f64> for ExtendedValue {
    fn from(n: f64) -> Self {
        ExtendedValue::NumberValue(n)
    }
}

impl From<&str> for ExtendedValue {
    fn from(s: &str) -> Self {
        ExtendedValue::string(s)
    }
}

impl From<String> for ExtendedValue {
    fn from(s: String) -> Self {
        ExtendedValue::StringValue(s)
    }
}

/// A single cell of a grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    /// The value as entered; `None` for an empty cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
}

impl CellData {
    /// Create a cell holding a value
    pub fn new(value: ExtendedValue) -> Self {
        Self {
            user_entered_value: Some(value),
        }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the cell holds no value
    pub fn is_empty(&self) -> bool {
        self.user_entered_value.is_none()
    }

    /// Get the cell's value
    pub fn value(&self) -> Option<&ExtendedValue> {
        self.user_entered_value.as_ref()
    }

    /// Replace the cell's value; `None` empties it
    pub fn set_value(&mut self, value: Option<ExtendedValue>) {
        self.user_entered_value = value;
    }

    /// Empty the cell
    pub fn clear(&mut self) {
        self.user_entered_value = None;
    }
}

impl From<Option<ExtendedValue>> for CellData {
    fn from(value: Option<ExtendedValue>) -> Self {
        Self {
            user_entered_value: value,
        }
    }
}

/// One row of a grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    /// Cells in column order
    #[serde(default)]
    pub values: Vec<CellData>,
}

impl RowData {
    /// Create a row from cells
    pub fn new(values: Vec<CellData>) -> Self {
        Self { values }
    }

    /// Create a row of `width` empty cells
    pub fn empty(width: u32) -> Self {
        Self {
            values: vec![CellData::empty(); width as usize],
        }
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u32) -> Option<&CellData> {
        self.values.get(col as usize)
    }

    /// Get a mutable cell by column index
    pub fn cell_mut(&mut self, col: u32) -> Option<&mut CellData> {
        self.values.get_mut(col as usize)
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
