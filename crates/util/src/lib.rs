//! `shopkit-util` — helpers over loosely-typed [`serde_json::Value`] payloads.
//!
//! Each helper polices its own input instead of assuming a shape: callers
//! hand in whatever the wire gave them.

use serde_json::Value;
use thiserror::Error;

/// Rejection raised by [`remove_duplicates`] for non-array input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("please provide an array of numbers or strings")]
    NotAnArray,
}

/// Whether `value` holds an integral number.
///
/// Float-typed values with a zero fractional part count as integral (`5.0`
/// is an integer); everything that is not a number does not.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64()
                || n.is_u64()
                || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

/// Lowercase a string value.
///
/// Non-string input yields the literal `Please provide a string` instead of
/// failing; callers treat the message as a soft error.
pub fn to_lower_case(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_lowercase(),
        _ => "Please provide a string".to_string(),
    }
}

/// Drop every later duplicate of an earlier element, preserving order.
///
/// Elements compare by JSON value equality. Anything that is not an array
/// is rejected with [`InputError::NotAnArray`].
pub fn remove_duplicates(value: &Value) -> Result<Vec<Value>, InputError> {
    let items = value.as_array().ok_or(InputError::NotAnArray)?;

    let mut kept: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.contains(item) {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}
