//! Shape arithmetic for trapezoidal integration.
//!
//! Pure functions over shape descriptors. Reshaping and broadcasting of the
//! tensors themselves happens in the callers via numr.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Map a possibly negative `dim` onto `[0, ndim)`.
pub fn normalize_dim(dim: isize, ndim: usize, context: &str) -> IntegrateResult<usize> {
    let rank = ndim as isize;
    let wrapped = if dim < 0 { dim + rank } else { dim };

    if wrapped < 0 || wrapped >= rank {
        return Err(IntegrateError::AxisOutOfBounds {
            dim,
            ndim,
            context: context.to_string(),
        });
    }

    Ok(wrapped as usize)
}

/// Left-pad `shape` with ones up to `target_ndim` dimensions.
///
/// Existing extents stay right-aligned. Shapes that already have at least
/// `target_ndim` dimensions come back unchanged.
///
/// `[5, 5, 5]` padded to 6 dimensions is `[1, 1, 1, 5, 5, 5]`.
pub fn pad_leading_dims(shape: &[usize], target_ndim: usize) -> Vec<usize> {
    let ndim = target_ndim.max(shape.len());
    let mut padded = vec![1; ndim];
    padded[ndim - shape.len()..].copy_from_slice(shape);
    padded
}

/// Shape of `ndim` ones with `len` at position `dim`.
///
/// Used to lay a 1-D coordinate vector along the integration axis.
pub fn place_on_dim(len: usize, dim: usize, ndim: usize) -> Vec<usize> {
    let mut shape = vec![1; ndim];
    shape[dim] = len;
    shape
}

/// `shape` with the entry at `dim` removed.
pub fn shape_without_dim(shape: &[usize], dim: usize) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != dim)
        .map(|(_, &s)| s)
        .collect()
}

/// `shape` with the entry at `dim` replaced by `len`.
pub fn with_dim_len(shape: &[usize], dim: usize, len: usize) -> Vec<usize> {
    let mut out = shape.to_vec();
    out[dim] = len;
    out
}

/// Broadcast two shapes, aligning trailing dimensions.
pub fn broadcast_shape(
    lhs: &[usize],
    rhs: &[usize],
    context: &str,
) -> IntegrateResult<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let lhs_padded = pad_leading_dims(lhs, ndim);
    let rhs_padded = pad_leading_dims(rhs, ndim);

    lhs_padded
        .iter()
        .zip(&rhs_padded)
        .map(|(&a, &b)| match (a, b) {
            _ if a == b => Ok(a),
            (1, _) => Ok(b),
            (_, 1) => Ok(a),
            _ => Err(IntegrateError::BroadcastMismatch {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
                context: context.to_string(),
            }),
        })
        .collect()
}
