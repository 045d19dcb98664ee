//! Dimension index helpers.

use crate::error::ZSpaceError;

/// Resolve a possibly-negative dimension index against `ndim` axes.
///
/// `-1` names the last axis. Anything outside `[-ndim, ndim)` is
/// [`ZSpaceError::IndexOutOfRange`].
pub fn resolve_dim(dim: isize, ndim: usize) -> Result<usize, ZSpaceError> {
    let resolved = if dim < 0 { dim + ndim as isize } else { dim };
    if resolved < 0 || resolved as usize >= ndim {
        return Err(ZSpaceError::IndexOutOfRange {
            context: "resolve_dim",
            index: dim as i128,
            size: ndim,
        });
    }
    Ok(resolved as usize)
}

/// Check that `perm` is a permutation of `0..ndim`.
pub fn check_permutation(perm: &[usize], ndim: usize) -> Result<(), ZSpaceError> {
    if perm.len() != ndim {
        return Err(ZSpaceError::dimension_mismatch(
            "check_permutation",
            ndim,
            perm.len(),
        ));
    }
    let mut seen = vec![false; ndim];
    for &p in perm {
        if p >= ndim || seen[p] {
            return Err(ZSpaceError::InvalidArgument {
                reason: format!("{perm:?} is not a permutation of 0..{ndim}"),
            });
        }
        seen[p] = true;
    }
    Ok(())
}
