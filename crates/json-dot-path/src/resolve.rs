use crate::types::IndexSpec;
use crate::PathError;

/// Resolve an `IndexSpec` against an array of length `len`.
///
/// - `$last` yields `len - 1`, which is `-1` for an empty array. The caller
///   decides what an out-of-range result means.
/// - `$new` yields `len` if `allow_new`, else [`PathError::NewNotAllowed`].
/// - `$N` yields `N`.
///
/// # Errors
///
/// [`PathError::InvalidIndex`] for an index that is none of the above, and
/// [`PathError::NewNotAllowed`] for `$new` in a read context.
///
/// # Example
///
/// ```
/// use json_dot_path::{resolve_index, IndexSpec, PathError};
///
/// assert_eq!(resolve_index(&IndexSpec::Last, 3, false), Ok(2));
/// assert_eq!(resolve_index(&IndexSpec::Last, 0, false), Ok(-1));
/// assert_eq!(resolve_index(&IndexSpec::New, 3, true), Ok(3));
/// assert_eq!(resolve_index(&IndexSpec::New, 3, false), Err(PathError::NewNotAllowed));
/// ```
pub fn resolve_index(spec: &IndexSpec, len: usize, allow_new: bool) -> Result<isize, PathError> {
    match spec {
        IndexSpec::Last => Ok(to_isize(len)? - 1),
        IndexSpec::New if allow_new => to_isize(len),
        IndexSpec::New => Err(PathError::NewNotAllowed),
        IndexSpec::At(index) => to_isize(*index),
        IndexSpec::Invalid(raw) => Err(PathError::InvalidIndex(raw.clone())),
    }
}

/// Resolve an index for reading: `Ok(None)` when the result does not address
/// an existing element.
pub fn resolve_existing(spec: &IndexSpec, len: usize) -> Result<Option<usize>, PathError> {
    let index = resolve_index(spec, len, false)?;
    Ok(usize::try_from(index).ok().filter(|i| *i < len))
}

fn to_isize(n: usize) -> Result<isize, PathError> {
    isize::try_from(n).map_err(|_| PathError::InvalidIndex(n.to_string()))
}
