//! Projections from a resolved value to primitives and typed lists.
//!
//! A projection succeeds only for a scalar of the matching kind. The
//! `DEFAULT_*` constants are what the document's typed getters return when
//! it does not; treat them as "not found", not as data.

use serde_json::Value;

pub const DEFAULT_STRING: &str = "";
pub const DEFAULT_INT: i32 = -1;
pub const DEFAULT_LONG: i64 = -1;
pub const DEFAULT_FLOAT: f64 = -1.0;
pub const DEFAULT_BOOL: bool = false;

pub fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Integral numbers that fit in an `i32`.
pub fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

pub fn as_i64(value: &Value) -> Option<i64> {
    value.as_i64()
}

/// Any number, integral or not.
pub fn as_f64(value: &Value) -> Option<f64> {
    value.as_f64()
}

pub fn as_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// Project every compatible element of an array, in order. Incompatible
/// elements are skipped; a non-array yields an empty list.
pub fn project_list<T>(value: &Value, project: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    match value {
        Value::Array(items) => items.iter().filter_map(project).collect(),
        _ => Vec::new(),
    }
}
