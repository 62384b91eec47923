//! Dotted path language for JSON documents.
//!
//! A path is a string of segments separated by `.`, such as `users.$0.name`.
//! A segment starting with `$` addresses an array element: `$N` is a literal
//! index, `$last` the final element and `$new` the append position. Every
//! other segment is an object key; a literal dot inside a key is written
//! `\.`.
//!
//! This crate only knows about path text and array lengths; walking a value
//! tree lives in `json-dot`.
//!
//! # Example
//!
//! ```
//! use json_dot_path::{format_path, parse_path, resolve_index, IndexSpec, Segment};
//!
//! let path = parse_path("users.$last.first\\.name");
//! assert_eq!(path.len(), 3);
//! assert_eq!(path[0], Segment::key("users"));
//! assert_eq!(path[2], Segment::key("first.name"));
//! assert_eq!(format_path(&path)?, "users.$last.first\\.name");
//!
//! assert_eq!(resolve_index(&IndexSpec::Last, 4, false), Ok(3));
//! # Ok::<(), json_dot_path::PathError>(())
//! ```

use thiserror::Error;

pub mod parse;
pub mod resolve;
pub mod types;
pub mod util;

pub use parse::parse_path;
pub use resolve::{resolve_existing, resolve_index};
pub use types::{IndexSpec, Path, Segment, INDEX_PREFIX, LAST, NEW};
pub use util::{escape_key, format_path, is_child, is_root, parent, unescape_key};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The text after `$` is neither `last`, `new` nor a non-negative integer.
    #[error("INVALID_INDEX: ${0}")]
    InvalidIndex(String),
    /// `$new` used where no element may be created.
    #[error("NEW_NOT_ALLOWED")]
    NewNotAllowed,
    /// A write addressed an index past the append position.
    #[error("INDEX_OUT_OF_BOUNDS: {index} (len {len})")]
    OutOfBounds { index: isize, len: usize },
    #[error("NO_PARENT")]
    NoParent,
    /// A segment no path string can express, such as a key starting with `$`.
    #[error("UNADDRESSABLE_SEGMENT: {0:?}")]
    Unaddressable(String),
}
