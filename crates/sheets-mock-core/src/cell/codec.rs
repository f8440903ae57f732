//! Conversion between tagged cell values and plain JSON scalars
//!
//! Requests carry cell values as bare JSON scalars (`"x"`, `1`, `true`, `null`);
//! cells store them as [`ExtendedValue`]. Arrays and objects have no cell form
//! and are rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::ExtendedValue;
use crate::error::{Error, Result};

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// How incoming strings are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Strings are stored exactly as given
    #[default]
    Raw,
    /// Strings starting with `=` are stored as formula text
    UserEntered,
}

impl ValueInputOption {
    /// Wire name of the option
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Encode a JSON scalar into a cell value. `null` encodes to an empty cell.
pub fn encode(value: &Value, option: ValueInputOption) -> Result<Option<ExtendedValue>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(ExtendedValue::BoolValue(*b))),
        Value::Number(n) => n
            .as_f64()
            .map(|n| Some(ExtendedValue::NumberValue(n)))
            .ok_or(Error::UnsupportedValueType("number")),
        Value::String(s) => {
            if option == ValueInputOption::UserEntered && s.starts_with('=') {
                Ok(Some(ExtendedValue::FormulaValue(s.clone())))
            } else {
                Ok(Some(ExtendedValue::StringValue(s.clone())))
            }
        }
        Value::Array(_) => Err(Error::UnsupportedValueType("array")),
        Value::Object(_) => Err(Error::UnsupportedValueType("object")),
    }
}

/// Decode a cell value into a JSON scalar. An empty cell decodes to `null`.
///
/// Whole numbers decode as JSON integers so `1` written is `1` read back.
pub fn decode(value: Option<&ExtendedValue>) -> Value {
    match value {
        None => Value::Null,
        Some(ExtendedValue::StringValue(s)) => Value::String(s.clone()),
        Some(ExtendedValue::FormulaValue(text)) => Value::String(text.clone()),
        Some(ExtendedValue::BoolValue(b)) => Value::Bool(*b),
        Some(ExtendedValue::NumberValue(n)) => number_to_json(*n),
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT {
        Value::from(n as i64)
    } else {
        // NaN and infinities have no JSON form
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
