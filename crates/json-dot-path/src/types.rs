//! Type definitions for dotted paths.

use std::fmt;

use crate::util::escape_key;

/// Prefix that marks a segment as an array index.
pub const INDEX_PREFIX: char = '$';

/// Index token for the final existing element of an array.
pub const LAST: &str = "last";

/// Index token for the append position of an array.
pub const NEW: &str = "new";

/// A dotted path: the ordered segments of a path string.
///
/// The empty path addresses the document root.
pub type Path = Vec<Segment>;

/// The index mini-language carried by an [`Segment::Index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexSpec {
    /// `$last`: `len - 1`. Read-only in the sense that it never appends.
    Last,
    /// `$new`: `len`, the append slot. Only legal where creation is allowed.
    New,
    /// `$N`: a literal non-negative index, written without leading zeros.
    At(usize),
    /// Anything else after `$`. Kept verbatim and rejected on resolve.
    Invalid(String),
}

impl IndexSpec {
    /// Interpret the text following the `$` prefix.
    ///
    /// Never fails; unrecognised text becomes [`IndexSpec::Invalid`]. So do
    /// digits with a leading zero (`007`), which would not format back the
    /// same way.
    pub fn from_token(token: &str) -> Self {
        match token {
            LAST => IndexSpec::Last,
            NEW => IndexSpec::New,
            _ if is_decimal_index(token) => token
                .parse()
                .map(IndexSpec::At)
                .unwrap_or_else(|_| IndexSpec::Invalid(token.to_string())),
            _ => IndexSpec::Invalid(token.to_string()),
        }
    }
}

fn is_decimal_index(token: &str) -> bool {
    match token.as_bytes() {
        [] => false,
        [b'0', _, ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

impl fmt::Display for IndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSpec::Last => write!(f, "{INDEX_PREFIX}{LAST}"),
            IndexSpec::New => write!(f, "{INDEX_PREFIX}{NEW}"),
            IndexSpec::At(i) => write!(f, "{INDEX_PREFIX}{i}"),
            IndexSpec::Invalid(raw) => write!(f, "{INDEX_PREFIX}{}", escape_key(raw)),
        }
    }
}

/// One dot-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Addresses a field of an object.
    Key(String),
    /// Addresses an element of an array.
    Index(IndexSpec),
}

impl Segment {
    /// Classify one unescaped token: `$`-prefixed tokens are indices, the
    /// rest are keys.
    pub fn from_token(token: String) -> Self {
        match token.strip_prefix(INDEX_PREFIX) {
            Some(spec) => Segment::Index(IndexSpec::from_token(spec)),
            None => Segment::Key(token),
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Segment::Key(key.into())
    }

    pub fn index(index: usize) -> Self {
        Segment::Index(IndexSpec::At(index))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Segment::Key(_))
    }

    /// The key text, if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key),
            Segment::Index(_) => None,
        }
    }

    /// The index spec, if this is an index segment.
    pub fn as_index(&self) -> Option<&IndexSpec> {
        match self {
            Segment::Index(spec) => Some(spec),
            Segment::Key(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(&escape_key(key)),
            Segment::Index(spec) => spec.fmt(f),
        }
    }
}

impl From<&str> for Segment {
    fn from(token: &str) -> Self {
        Segment::from_token(token.to_string())
    }
}
