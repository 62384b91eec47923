//! Walking parsed paths through a `serde_json::Value` tree.
//!
//! Read mode (`lookup`, `contains`, `remove_at`) never creates anything:
//! a null or missing link means "absent". Write mode (`set_at`) turns every
//! null link into an empty container whose kind is chosen by the segment
//! that will be applied to it, so a deep write always has somewhere to land.
//!
//! All functions operate on a bare root; locking is the caller's concern.

use json_dot_path::{resolve_existing, resolve_index, IndexSpec, PathError, Segment};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{kind_name, DocumentError};
use crate::options::{DocumentOptions, IndexOverflow};

/// Find the value at `path`.
///
/// `Ok(None)` when a link is null, a key is missing, or an index is out of
/// range.
///
/// # Errors
///
/// [`DocumentError::PathType`] when a segment meets a value of the wrong
/// kind, and [`DocumentError::Index`] for an invalid index or `$new`.
pub fn lookup<'a>(root: &'a Value, path: &[Segment]) -> Result<Option<&'a Value>, DocumentError> {
    let mut current = root;
    for segment in path {
        let next = match (segment, current) {
            (_, Value::Null) => return Ok(None),
            (Segment::Key(key), Value::Object(map)) => map.get(key),
            (Segment::Index(spec), Value::Array(arr)) => {
                resolve_existing(spec, arr.len())?.map(|i| &arr[i])
            }
            (segment, value) => return Err(DocumentError::mismatch(segment, value)),
        };
        match next {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

fn lookup_mut<'a>(
    root: &'a mut Value,
    path: &[Segment],
) -> Result<Option<&'a mut Value>, DocumentError> {
    let mut current = root;
    for segment in path {
        let next = match (segment, current) {
            (_, Value::Null) => return Ok(None),
            (Segment::Key(key), Value::Object(map)) => map.get_mut(key),
            (Segment::Index(spec), Value::Array(arr)) => match resolve_existing(spec, arr.len())? {
                Some(i) => arr.get_mut(i),
                None => None,
            },
            (segment, value) => return Err(DocumentError::mismatch(segment, value)),
        };
        match next {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// The value at `path`, or the null sentinel when it is absent.
pub fn get(root: &Value, path: &[Segment]) -> Result<Value, DocumentError> {
    Ok(lookup(root, path)?.cloned().unwrap_or(Value::Null))
}

/// Whether a non-null value exists at `path`.
///
/// A `$new` segment never addresses an existing element, so it yields
/// `false` instead of an index error.
pub fn contains(root: &Value, path: &[Segment]) -> Result<bool, DocumentError> {
    match lookup(root, path) {
        Ok(found) => Ok(found.is_some_and(|value| !value.is_null())),
        Err(DocumentError::Index(PathError::NewNotAllowed)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Write `value` at `path`, creating missing containers on the way.
///
/// An empty path replaces the root. A failed write may leave freshly
/// created empty containers behind; existing siblings are never touched.
pub fn set_at(
    root: &mut Value,
    path: &[Segment],
    value: Value,
    options: &DocumentOptions,
) -> Result<(), DocumentError> {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return Ok(());
    };

    let mut current = root;
    for (i, segment) in parents.iter().enumerate() {
        vivify(current, segment);
        current = child_slot(current, segment, &path[i + 1], options)?;
    }
    vivify(current, last);
    commit(current, last, value, options)
}

/// Remove the key or element at `path` and return it.
///
/// A path whose parent is absent is a no-op. An empty path resets the root
/// to null.
pub fn remove_at(root: &mut Value, path: &[Segment]) -> Result<Option<Value>, DocumentError> {
    let Some((last, parents)) = path.split_last() else {
        let old = std::mem::take(root);
        return Ok((!old.is_null()).then_some(old));
    };

    let Some(parent) = lookup_mut(root, parents)? else {
        return Ok(None);
    };
    match (last, parent) {
        (_, Value::Null) => Ok(None),
        (Segment::Key(key), Value::Object(map)) => Ok(map.shift_remove(key)),
        (Segment::Index(IndexSpec::New), Value::Array(_)) => Err(DocumentError::PathType {
            segment: last.to_string(),
            expected: "an existing element",
            found: "the append slot",
        }),
        (Segment::Index(spec), Value::Array(arr)) => {
            Ok(resolve_existing(spec, arr.len())?.map(|i| arr.remove(i)))
        }
        (segment, value) => Err(DocumentError::mismatch(segment, value)),
    }
}

/// Copy the value at `src` to `dst` if `src` holds one. Returns whether a
/// copy happened.
pub fn copy_at(
    root: &mut Value,
    src: &[Segment],
    dst: &[Segment],
    options: &DocumentOptions,
) -> Result<bool, DocumentError> {
    if !contains(root, src)? {
        return Ok(false);
    }
    let value = get(root, src)?;
    set_at(root, dst, value, options)?;
    Ok(true)
}

/// [`copy_at`] followed by removing `src`.
pub fn move_at(
    root: &mut Value,
    src: &[Segment],
    dst: &[Segment],
    options: &DocumentOptions,
) -> Result<bool, DocumentError> {
    if !copy_at(root, src, dst, options)? {
        return Ok(false);
    }
    remove_at(root, src)?;
    Ok(true)
}

/// An empty container of the kind `segment` addresses.
fn empty_container(segment: &Segment) -> Value {
    if segment.is_index() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn vivify(current: &mut Value, segment: &Segment) {
    if current.is_null() {
        *current = empty_container(segment);
        debug!(%segment, kind = kind_name(current), "vivified container");
    }
}

/// The child slot `segment` addresses inside `current`, created when missing.
/// A created child is already a container of the kind `next` addresses.
fn child_slot<'a>(
    current: &'a mut Value,
    segment: &Segment,
    next: &Segment,
    options: &DocumentOptions,
) -> Result<&'a mut Value, DocumentError> {
    match (segment, current) {
        (Segment::Key(key), Value::Object(map)) => Ok(map
            .entry(key.clone())
            .or_insert_with(|| empty_container(next))),
        (Segment::Index(spec), Value::Array(arr)) => {
            let index = writable_index(spec, arr, options)?;
            if index == arr.len() {
                arr.push(empty_container(next));
            }
            Ok(&mut arr[index])
        }
        (segment, value) => Err(DocumentError::mismatch(segment, value)),
    }
}

fn commit(
    current: &mut Value,
    last: &Segment,
    value: Value,
    options: &DocumentOptions,
) -> Result<(), DocumentError> {
    match (last, current) {
        (Segment::Key(key), Value::Object(map)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Segment::Index(spec), Value::Array(arr)) => {
            let index = writable_index(spec, arr, options)?;
            if index == arr.len() {
                arr.push(value);
            } else {
                arr[index] = value;
            }
            Ok(())
        }
        (segment, found) => Err(DocumentError::mismatch(segment, found)),
    }
}

/// Resolve `spec` for writing. The result is at most `arr.len()`; with
/// [`IndexOverflow::PadWithNull`] the array is padded up to the index first,
/// as long as the gap fits `options.max_pad` and the allocator.
fn writable_index(
    spec: &IndexSpec,
    arr: &mut Vec<Value>,
    options: &DocumentOptions,
) -> Result<usize, DocumentError> {
    let len = arr.len();
    let index = resolve_index(spec, len, true)?;
    let out_of_bounds = || DocumentError::Index(PathError::OutOfBounds { index, len });
    let index = usize::try_from(index).map_err(|_| out_of_bounds())?;
    if index > len {
        let gap = index - len;
        match options.index_overflow {
            IndexOverflow::Reject => return Err(out_of_bounds()),
            IndexOverflow::PadWithNull if gap > options.max_pad => {
                debug!(index, len, max_pad = options.max_pad, "padding refused");
                return Err(out_of_bounds());
            }
            IndexOverflow::PadWithNull => {
                trace!(index, len, "padding array with nulls");
                arr.try_reserve(gap + 1).map_err(|_| out_of_bounds())?;
                arr.resize(index, Value::Null);
            }
        }
    }
    Ok(index)
}
