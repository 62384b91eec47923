use crate::types::{Path, Segment};
use crate::util::{ESCAPE, SEPARATOR};

/// Parse a dotted path string into segments.
///
/// A single left-to-right scan splits on every `.` that is not preceded by
/// `\`, and decodes `\.` into a literal `.` within the token. A backslash
/// before any other character is kept as written. Tokens starting with `$`
/// become [`Segment::Index`], all others [`Segment::Key`].
///
/// Parsing never fails. The empty string is the root path; empty tokens
/// (as in `a..b`) are keys named `""`.
///
/// # Example
///
/// ```
/// use json_dot_path::{parse_path, IndexSpec, Segment};
///
/// assert_eq!(parse_path(""), Vec::<Segment>::new());
/// assert_eq!(
///     parse_path("a.$last.b\\.c"),
///     vec![
///         Segment::key("a"),
///         Segment::Index(IndexSpec::Last),
///         Segment::key("b.c"),
///     ]
/// );
/// ```
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut token = String::new();
    let mut escaped = false;

    for c in path.chars() {
        if escaped {
            escaped = false;
            if c == SEPARATOR {
                token.push(SEPARATOR);
                continue;
            }
            token.push(ESCAPE);
        }
        match c {
            ESCAPE => escaped = true,
            SEPARATOR => segments.push(Segment::from_token(std::mem::take(&mut token))),
            _ => token.push(c),
        }
    }
    if escaped {
        token.push(ESCAPE);
    }
    segments.push(Segment::from_token(token));

    segments
}
