use crate::types::{IndexSpec, Segment, INDEX_PREFIX};
use crate::PathError;

/// Escape character for literal dots inside a key.
pub const ESCAPE: char = '\\';

/// Separator between segments.
pub const SEPARATOR: char = '.';

/// Escapes a key so that it survives a round-trip through [`crate::parse_path`].
///
/// Every `.` becomes `\.`.
///
/// # Example
///
/// ```
/// use json_dot_path::escape_key;
///
/// assert_eq!(escape_key("a.b"), "a\\.b");
/// assert_eq!(escape_key("plain"), "plain");
/// ```
pub fn escape_key(key: &str) -> String {
    if !key.contains(SEPARATOR) {
        return key.to_string();
    }
    key.replace(SEPARATOR, "\\.")
}

/// Unescapes one path component: `\.` becomes `.`, any other backslash is
/// kept as written.
///
/// # Example
///
/// ```
/// use json_dot_path::unescape_key;
///
/// assert_eq!(unescape_key("a\\.b"), "a.b");
/// assert_eq!(unescape_key("c\\d"), "c\\d");
/// ```
pub fn unescape_key(component: &str) -> String {
    if !component.contains(ESCAPE) {
        return component.to_string();
    }
    let mut out = String::with_capacity(component.len());
    let mut escaped = false;
    for c in component.chars() {
        if escaped {
            escaped = false;
            if c == SEPARATOR {
                out.push(SEPARATOR);
                continue;
            }
            out.push(ESCAPE);
        }
        if c == ESCAPE {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    if escaped {
        out.push(ESCAPE);
    }
    out
}

/// Format segments back into a path string that [`crate::parse_path`] reads
/// as the same segments.
///
/// Returns an empty string for the root path.
///
/// # Errors
///
/// [`PathError::Unaddressable`] for a segment no path string can express:
///
/// - a key starting with `$`, which would read back as an index;
/// - a key or index token ending in `\` before another segment, since the
///   separator after it would read as escaped;
/// - an invalid index token that reads back as a valid one, such as `$5`;
/// - a single empty key, which would read back as the root.
///
/// # Example
///
/// ```
/// use json_dot_path::{format_path, parse_path, Segment};
///
/// let path = parse_path("users.$0.first\\.name");
/// assert_eq!(format_path(&path)?, "users.$0.first\\.name");
/// assert_eq!(format_path(&[])?, "");
/// assert!(format_path(&[Segment::key("$price")]).is_err());
/// # Ok::<(), json_dot_path::PathError>(())
/// ```
pub fn format_path(path: &[Segment]) -> Result<String, PathError> {
    if let [Segment::Key(key)] = path {
        if key.is_empty() {
            return Err(PathError::Unaddressable(String::new()));
        }
    }
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        let text = segment.to_string();
        let followed = i + 1 < path.len();
        if !reads_back(segment) || (followed && text.ends_with(ESCAPE)) {
            return Err(PathError::Unaddressable(text));
        }
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&text);
    }
    Ok(out)
}

fn reads_back(segment: &Segment) -> bool {
    match segment {
        Segment::Key(key) => !key.starts_with(INDEX_PREFIX),
        Segment::Index(IndexSpec::Invalid(raw)) => {
            matches!(IndexSpec::from_token(raw), IndexSpec::Invalid(_))
        }
        Segment::Index(_) => true,
    }
}

/// Check if a path points to the root value.
pub fn is_root(path: &[Segment]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict prefix of `child`.
pub fn is_child(parent: &[Segment], child: &[Segment]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PathError::NoParent`] for the root path.
pub fn parent(path: &[Segment]) -> Result<&[Segment], PathError> {
    match path.split_last() {
        Some((_, parent)) => Ok(parent),
        None => Err(PathError::NoParent),
    }
}
