//! Definite trapezoidal integration along an arbitrary axis.
//!
//! All implementations use numr tensor ops - no scalar loops.

use numr::ops::{ScalarOps, TensorOps, TypeConversionOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::traits::Spacing;

use super::shape::{broadcast_shape, normalize_dim, shape_without_dim, with_dim_len};
use super::spacing::{
    IntervalWidths, broadcast_mul, ensure_numeric, interval_widths, pair_sums, promote_to_float,
};

const CONTEXT: &str = "trapezoid";

/// Trapezoidal rule along `dim`.
///
/// Validates the inputs, resolves the spacing and dispatches to the
/// per-interval or constant-width reduction. Integer inputs are widened to a
/// floating dtype first, and mixed float inputs meet at the wider one. A
/// zero-length axis yields zeros shaped like `y` without `dim`.
pub fn trapezoid_impl<R, C>(
    client: &C,
    y: &Tensor<R>,
    spacing: Spacing<'_, R>,
    dim: isize,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + TypeConversionOps<R> + RuntimeClient<R>,
{
    let dim = normalize_dim(dim, y.ndim(), CONTEXT)?;
    ensure_numeric(y, &spacing, CONTEXT)?;

    let (y, x) = promote_to_float(client, y, &spacing)?;
    let y = &y;
    let spacing = x.as_ref().map_or(spacing, Spacing::Samples);

    tracing::trace!(
        target: "trapz",
        op = CONTEXT,
        dim,
        shape = ?y.shape(),
        uniform = spacing.is_uniform()
    );

    if y.shape()[dim] == 0 {
        tracing::debug!(target: "trapz", dim, "empty integration axis, returning zeros");
        return Ok(zeros_without_dim(client, y, dim));
    }

    match interval_widths(client, y, &spacing, dim, CONTEXT)? {
        IntervalWidths::Constant(dx) => trapezoid_constant(client, y, dx, dim),
        IntervalWidths::PerInterval(dx) => trapezoid_per_interval(client, y, &dx, dim),
    }
}

/// `sum((y[:-1] + y[1:]) * dx) / 2` along `dim`, broadcasting `dx`.
pub fn trapezoid_per_interval<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: &Tensor<R>,
    dim: usize,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let n = y.shape()[dim];

    if n < 2 {
        // No intervals: the sum over an empty axis.
        let pairs_shape = with_dim_len(y.shape(), dim, 0);
        let out_shape = broadcast_shape(&pairs_shape, dx.shape(), CONTEXT)?;
        let zeros = Tensor::<R>::zeros(
            &shape_without_dim(&out_shape, dim),
            y.dtype(),
            client.device(),
        );
        return Ok(zeros);
    }

    let sums = pair_sums(client, y, dim)?;
    let areas = broadcast_mul(client, &sums, dx, CONTEXT)?;
    let total = client.sum(&areas, &[dim], false)?;
    Ok(client.div_scalar(&total, 2.0)?)
}

/// `(sum(y) - (y[0] + y[n-1]) / 2) * dx` along `dim`.
///
/// Equivalent to the per-interval form with every width equal to `dx`,
/// without materializing shifted copies of `y`.
pub fn trapezoid_constant<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: f64,
    dim: usize,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let n = y.shape()[dim];

    let total = client.sum(y, &[dim], false)?;

    let y_first = y.narrow(dim as isize, 0, 1)?.contiguous();
    let y_last = y.narrow(dim as isize, n - 1, 1)?.contiguous();

    // Reduce the size-1 axis away so the endpoints match `total`
    let endpoints = client.add(&y_first, &y_last)?;
    let endpoints = client.sum(&endpoints, &[dim], false)?;
    let half_endpoints = client.mul_scalar(&endpoints, 0.5)?;

    let interior = client.sub(&total, &half_endpoints)?;
    Ok(client.mul_scalar(&interior, dx)?)
}

/// Zeros shaped like `y` with `dim` removed.
pub fn zeros_without_dim<R, C>(client: &C, y: &Tensor<R>, dim: usize) -> Tensor<R>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    Tensor::<R>::zeros(&shape_without_dim(y.shape(), dim), y.dtype(), client.device())
}
