//! Helpers for extracting required, validated parameters from a `serde_json::Value` object.
//!
//! Curve parameters have no defaults: a missing key or a value of the wrong
//! JSON type is an error. The `ensure_*` checks reject values that would
//! produce a degenerate or non-terminating animation.

use serde_json::Value;

use crate::error::CurveError;
use crate::Point;

/// Short name of a JSON value's type, used in mismatch errors.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lookup<'a>(params: &'a Value, name: &str) -> Result<&'a Value, CurveError> {
    params
        .get(name)
        .ok_or_else(|| CurveError::ParamNotFound(name.to_string()))
}

/// Extracts a required `f64` from `params[name]`.
///
/// Accepts both JSON floats and integers.
pub fn require_f64(params: &Value, name: &str) -> Result<f64, CurveError> {
    let value = lookup(params, name)?;
    value.as_f64().ok_or_else(|| CurveError::ParamTypeMismatch {
        name: name.to_string(),
        expected: "number".into(),
        got: json_type_name(value).into(),
    })
}

/// Extracts a required point from `params[name]`.
///
/// Accepts either a two-element array `[x, y]` or an object `{"x": .., "y": ..}`.
pub fn require_point(params: &Value, name: &str) -> Result<Point, CurveError> {
    let value = lookup(params, name)?;
    let mismatch = || CurveError::ParamTypeMismatch {
        name: name.to_string(),
        expected: "[x, y]".into(),
        got: json_type_name(value).into(),
    };
    let (x, y) = match value {
        Value::Array(items) if items.len() == 2 => (items[0].as_f64(), items[1].as_f64()),
        Value::Object(_) => (
            value.get("x").and_then(Value::as_f64),
            value.get("y").and_then(Value::as_f64),
        ),
        _ => return Err(mismatch()),
    };
    match (x, y) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(mismatch()),
    }
}

/// Rejects NaN and infinite values.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64, CurveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CurveError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: "must be finite".into(),
        })
    }
}

/// Rejects values that are not strictly positive and finite.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64, CurveError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: "must be > 0".into(),
        })
    }
}

/// Rejects points with a non-finite coordinate.
pub fn ensure_finite_point(name: &str, point: Point) -> Result<Point, CurveError> {
    ensure_finite(name, point.x)?;
    ensure_finite(name, point.y)?;
    Ok(point)
}
