//! json-dot: path-addressed JSON documents.
//!
//! A [`Document`] owns one `serde_json::Value` and exposes it through dotted
//! paths (see `json-dot-path` for the path language):
//!
//! - reads (`get`, `contains`, typed getters) treat anything missing as
//!   absent and only fail on a structural mismatch;
//! - `set` creates every missing container on the way, choosing an array
//!   when the next segment is an index and an object otherwise;
//! - `remove` deletes one key or element and is idempotent.
//!
//! # Example
//!
//! ```
//! use json_dot::Document;
//! use serde_json::json;
//!
//! let doc = Document::empty();
//! doc.set("a.$0.b", 1)?;
//! assert_eq!(doc.root(), json!({"a": [{"b": 1}]}));
//!
//! doc.set("a\\.b", "x")?;
//! assert_eq!(doc.get_string("a\\.b")?, "x");
//! # Ok::<(), json_dot::DocumentError>(())
//! ```

pub mod accessors;
pub mod cli;
pub mod document;
pub mod error;
pub mod navigator;
pub mod options;
pub mod persist;

pub use document::Document;
pub use error::{kind_name, DocumentError};
pub use json_dot_path::{parse_path, IndexSpec, Path, PathError, Segment};
pub use options::{DocumentOptions, IndexOverflow};
