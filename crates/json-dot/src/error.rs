use json_dot_path::{PathError, Segment};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// A segment's required container kind does not match the value it is
    /// applied to.
    #[error("PATH_TYPE: segment `{segment}` expects {expected}, found {found}")]
    PathType {
        segment: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Index(#[from] PathError),
    /// A container view was requested for a path that holds nothing.
    #[error("MISSING: {0}")]
    Missing(String),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("MAPPING: {0}")]
    Mapping(#[source] serde_json::Error),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("CONFIG: {0}")]
    Config(String),
}

impl DocumentError {
    pub(crate) fn mismatch(segment: &Segment, found: &Value) -> Self {
        DocumentError::PathType {
            segment: segment.to_string(),
            expected: if segment.is_index() { "array" } else { "object" },
            found: kind_name(found),
        }
    }

    /// True for the structural mismatch class of errors.
    pub fn is_path_type(&self) -> bool {
        matches!(self, DocumentError::PathType { .. })
    }

    /// True for index mini-language errors.
    pub fn is_index(&self) -> bool {
        matches!(self, DocumentError::Index(_))
    }
}

/// JSON type name of a value, as used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
