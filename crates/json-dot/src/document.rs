//! The `Document` facade: one owned root value behind a lock.

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use json_dot_path::parse_path;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::accessors::{self, DEFAULT_BOOL, DEFAULT_FLOAT, DEFAULT_INT, DEFAULT_LONG, DEFAULT_STRING};
use crate::error::{kind_name, DocumentError};
use crate::navigator;
use crate::options::DocumentOptions;
use crate::persist;

/// A JSON document addressed by dotted paths.
///
/// Every method takes `&self`. Mutations hold the write lock for their whole
/// duration (vivification may replace the root itself); reads hold the
/// shared lock, so a read sees the document either before or after a
/// concurrent write. Multi-call consistency needs external synchronization.
///
/// # Example
///
/// ```
/// use json_dot::Document;
/// use serde_json::json;
///
/// let doc = Document::empty();
/// doc.set("users.$new.name", "Ann")?.set("users.$new.name", "Bo")?;
/// assert_eq!(doc.get_string("users.$0.name")?, "Ann");
/// assert_eq!(doc.size("users")?, 2);
///
/// doc.remove("users.$0")?;
/// assert_eq!(doc.get("users.$0.name")?, json!("Bo"));
/// # Ok::<(), json_dot::DocumentError>(())
/// ```
pub struct Document {
    root: RwLock<Value>,
    options: DocumentOptions,
}

impl Document {
    /// A document whose root is null.
    pub fn empty() -> Self {
        Self::from_value(Value::Null)
    }

    pub fn from_value(root: Value) -> Self {
        Self {
            root: RwLock::new(root),
            options: DocumentOptions::default(),
        }
    }

    /// Parse JSON text into a document.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        Ok(Self::from_value(serde_json::from_str(text)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Ok(Self::from_value(persist::read_value(reader)?))
    }

    /// Read and parse the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Ok(Self::from_value(persist::load_value(path.as_ref())?))
    }

    /// Map any serializable object to a document.
    pub fn from_serializable<T: Serialize>(object: &T) -> Result<Self, DocumentError> {
        let root = serde_json::to_value(object).map_err(DocumentError::Mapping)?;
        Ok(Self::from_value(root))
    }

    pub fn with_options(mut self, options: DocumentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// A copy of the root value.
    pub fn root(&self) -> Value {
        self.root.read().clone()
    }

    pub fn into_value(self) -> Value {
        self.root.into_inner()
    }

    /// True when the root is null.
    pub fn is_empty(&self) -> bool {
        self.root.read().is_null()
    }

    /// Map the root back to an object.
    pub fn to_deserialized<T: DeserializeOwned>(&self) -> Result<T, DocumentError> {
        serde_json::from_value(self.root()).map_err(DocumentError::Mapping)
    }

    // ── Reads ──────────────────────────────────────────────────────────────

    pub fn contains(&self, path: &str) -> Result<bool, DocumentError> {
        navigator::contains(&self.root.read(), &parse_path(path))
    }

    /// The value at `path`, or `Value::Null` when nothing is there.
    ///
    /// # Errors
    ///
    /// [`DocumentError::PathType`] when the path runs into a value of the
    /// wrong kind; [`DocumentError::Index`] for a malformed index or `$new`.
    pub fn get(&self, path: &str) -> Result<Value, DocumentError> {
        navigator::get(&self.root.read(), &parse_path(path))
    }

    pub fn get_or_default(&self, path: &str, fallback: Value) -> Result<Value, DocumentError> {
        let value = self.get(path)?;
        Ok(if value.is_null() { fallback } else { value })
    }

    fn project<T>(
        &self,
        path: &str,
        project: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<T>, DocumentError> {
        let root = self.root.read();
        Ok(navigator::lookup(&root, &parse_path(path))?.and_then(project))
    }

    fn project_list<T>(
        &self,
        path: &str,
        project: impl Fn(&Value) -> Option<T>,
    ) -> Result<Vec<T>, DocumentError> {
        let root = self.root.read();
        Ok(navigator::lookup(&root, &parse_path(path))?
            .map(|value| accessors::project_list(value, project))
            .unwrap_or_default())
    }

    /// The string at `path`, or `""` when absent or not a string.
    pub fn get_string(&self, path: &str) -> Result<String, DocumentError> {
        self.get_string_or(path, DEFAULT_STRING)
    }

    pub fn get_string_or(&self, path: &str, default: &str) -> Result<String, DocumentError> {
        Ok(self
            .project(path, accessors::as_string)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// The integer at `path`, or `-1` when absent or not an `i32`.
    pub fn get_i32(&self, path: &str) -> Result<i32, DocumentError> {
        self.get_i32_or(path, DEFAULT_INT)
    }

    pub fn get_i32_or(&self, path: &str, default: i32) -> Result<i32, DocumentError> {
        Ok(self.project(path, accessors::as_i32)?.unwrap_or(default))
    }

    /// The integer at `path`, or `-1` when absent or not an `i64`.
    pub fn get_i64(&self, path: &str) -> Result<i64, DocumentError> {
        self.get_i64_or(path, DEFAULT_LONG)
    }

    pub fn get_i64_or(&self, path: &str, default: i64) -> Result<i64, DocumentError> {
        Ok(self.project(path, accessors::as_i64)?.unwrap_or(default))
    }

    /// The number at `path`, or `-1.0` when absent or not a number.
    pub fn get_f64(&self, path: &str) -> Result<f64, DocumentError> {
        self.get_f64_or(path, DEFAULT_FLOAT)
    }

    pub fn get_f64_or(&self, path: &str, default: f64) -> Result<f64, DocumentError> {
        Ok(self.project(path, accessors::as_f64)?.unwrap_or(default))
    }

    /// The boolean at `path`, or `false` when absent or not a boolean.
    pub fn get_bool(&self, path: &str) -> Result<bool, DocumentError> {
        self.get_bool_or(path, DEFAULT_BOOL)
    }

    pub fn get_bool_or(&self, path: &str, default: bool) -> Result<bool, DocumentError> {
        Ok(self.project(path, accessors::as_bool)?.unwrap_or(default))
    }

    pub fn get_string_list(&self, path: &str) -> Result<Vec<String>, DocumentError> {
        self.project_list(path, accessors::as_string)
    }

    pub fn get_i32_list(&self, path: &str) -> Result<Vec<i32>, DocumentError> {
        self.project_list(path, accessors::as_i32)
    }

    pub fn get_i64_list(&self, path: &str) -> Result<Vec<i64>, DocumentError> {
        self.project_list(path, accessors::as_i64)
    }

    pub fn get_f64_list(&self, path: &str) -> Result<Vec<f64>, DocumentError> {
        self.project_list(path, accessors::as_f64)
    }

    pub fn get_bool_list(&self, path: &str) -> Result<Vec<bool>, DocumentError> {
        self.project_list(path, accessors::as_bool)
    }

    /// A detached document holding a copy of the value at `path`.
    ///
    /// Changes to either document are not visible in the other.
    pub fn get_document(&self, path: &str) -> Result<Document, DocumentError> {
        Ok(Self::from_value(self.get(path)?).with_options(self.options.clone()))
    }

    /// Map the value at `path` to an object.
    pub fn deserialize<T: DeserializeOwned>(&self, path: &str) -> Result<T, DocumentError> {
        serde_json::from_value(self.get(path)?).map_err(DocumentError::Mapping)
    }

    /// Keys of the object at `path`, in document order.
    pub fn key_set(&self, path: &str) -> Result<Vec<String>, DocumentError> {
        self.with_container(path, |value| match value {
            Value::Object(map) => Ok(map.keys().cloned().collect()),
            other => Err(container_mismatch(path, "object", other)),
        })
    }

    /// Values of the object or array at `path`.
    pub fn values(&self, path: &str) -> Result<Vec<Value>, DocumentError> {
        self.with_container(path, |value| match value {
            Value::Object(map) => Ok(map.values().cloned().collect()),
            Value::Array(items) => Ok(items.clone()),
            other => Err(container_mismatch(path, "object or array", other)),
        })
    }

    /// Number of entries of the object or array at `path`.
    pub fn size(&self, path: &str) -> Result<usize, DocumentError> {
        self.with_container(path, |value| match value {
            Value::Object(map) => Ok(map.len()),
            Value::Array(items) => Ok(items.len()),
            other => Err(container_mismatch(path, "object or array", other)),
        })
    }

    fn with_container<T>(
        &self,
        path: &str,
        f: impl FnOnce(&Value) -> Result<T, DocumentError>,
    ) -> Result<T, DocumentError> {
        let root = self.root.read();
        match navigator::lookup(&root, &parse_path(path))? {
            Some(value) if !value.is_null() => f(value),
            _ => Err(DocumentError::Missing(path.to_string())),
        }
    }

    // ── Writes ─────────────────────────────────────────────────────────────

    /// Write `value` at `path`, creating any missing containers.
    ///
    /// # Errors
    ///
    /// [`DocumentError::PathType`] when an existing value is of the wrong
    /// kind; [`DocumentError::Index`] for a malformed index, or a literal
    /// index past the append position under `IndexOverflow::Reject` (or
    /// more than `max_pad` past it under `PadWithNull`).
    pub fn set(&self, path: &str, value: impl Into<Value>) -> Result<&Self, DocumentError> {
        trace!(path, "set");
        let mut root = self.root.write();
        navigator::set_at(
            &mut root,
            &parse_path(path),
            value.into(),
            &self.options,
        )?;
        Ok(self)
    }

    /// Store a copy of another document's root at `path`.
    pub fn set_document(&self, path: &str, other: &Document) -> Result<&Self, DocumentError> {
        let value = other.root();
        self.set(path, value)
    }

    /// Map an object to JSON and store it at `path`.
    pub fn serialize<T: Serialize>(&self, path: &str, object: &T) -> Result<&Self, DocumentError> {
        let value = serde_json::to_value(object).map_err(DocumentError::Mapping)?;
        self.set(path, value)
    }

    /// Delete the key or element at `path`. Absent paths are a no-op.
    pub fn remove(&self, path: &str) -> Result<&Self, DocumentError> {
        trace!(path, "remove");
        let mut root = self.root.write();
        navigator::remove_at(&mut root, &parse_path(path))?;
        Ok(self)
    }

    /// Reset the root to null.
    pub fn clear(&self) -> &Self {
        *self.root.write() = Value::Null;
        self
    }

    /// Copy the value at `src` to `dst` when `src` holds one.
    pub fn copy_to(&self, src: &str, dst: &str) -> Result<&Self, DocumentError> {
        trace!(src, dst, "copy");
        let mut root = self.root.write();
        navigator::copy_at(
            &mut root,
            &parse_path(src),
            &parse_path(dst),
            &self.options,
        )?;
        Ok(self)
    }

    /// Copy the value at `src` to `dst`, then remove `src`.
    pub fn move_to(&self, src: &str, dst: &str) -> Result<&Self, DocumentError> {
        trace!(src, dst, "move");
        let mut root = self.root.write();
        navigator::move_at(
            &mut root,
            &parse_path(src),
            &parse_path(dst),
            &self.options,
        )?;
        Ok(self)
    }

    // ── Serialization ──────────────────────────────────────────────────────

    /// Serialize the document; `pretty` uses the configured indent.
    pub fn to_json_string(&self, pretty: bool) -> Result<String, DocumentError> {
        persist::to_text(&self.root.read(), pretty, self.options.indent)
    }

    pub fn write_to<W: Write>(&self, writer: W, pretty: bool) -> Result<(), DocumentError> {
        persist::write_value(writer, &self.root.read(), pretty, self.options.indent)
    }

    /// Write the document to the file at `path`, followed by a newline.
    ///
    /// Holds the write lock so saves are serialized with mutations.
    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), DocumentError> {
        let root = self.root.write();
        persist::save_value(path.as_ref(), &root, pretty, self.options.indent)
    }
}

fn container_mismatch(path: &str, expected: &'static str, found: &Value) -> DocumentError {
    DocumentError::PathType {
        segment: path.to_string(),
        expected,
        found: kind_name(found),
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self::from_value(self.root()).with_options(self.options.clone())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &*self.root.read())
            .field("options", &self.options)
            .finish()
    }
}

/// Compact JSON.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.read())
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        *self.root.read() == *other.root.read()
    }
}
