//! Cumulative trapezoidal integration along an arbitrary axis.

use numr::ops::{ScalarOps, TensorOps, TypeConversionOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::traits::Spacing;

use super::shape::{broadcast_shape, normalize_dim, with_dim_len};
use super::spacing::{
    IntervalWidths, broadcast_mul, ensure_numeric, interval_widths, pair_sums, promote_to_float,
};

const CONTEXT: &str = "cumulative_trapezoid";

/// Running trapezoidal integral along `dim`.
///
/// The output has `dim` shortened by one and a floating dtype, with the same
/// promotion as [`trapezoid_impl`]. Unlike [`trapezoid_impl`], there is
/// no zero-length guard: an axis with fewer than two samples yields an empty
/// result along `dim`.
///
/// [`trapezoid_impl`]: super::trapezoid::trapezoid_impl
pub fn cumulative_trapezoid_impl<R, C>(
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

    match interval_widths(client, y, &spacing, dim, CONTEXT)? {
        IntervalWidths::Constant(dx) => cumulative_trapezoid_constant(client, y, dx, dim),
        IntervalWidths::PerInterval(dx) => {
            cumulative_trapezoid_per_interval(client, y, &dx, dim)
        }
    }
}

/// `cumsum((y[:-1] + y[1:]) * dx) / 2` along `dim`, broadcasting `dx`.
pub fn cumulative_trapezoid_per_interval<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: &Tensor<R>,
    dim: usize,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    if y.shape()[dim] < 2 {
        let pairs_shape = with_dim_len(y.shape(), dim, 0);
        let out_shape = broadcast_shape(&pairs_shape, dx.shape(), CONTEXT)?;
        return Ok(Tensor::<R>::zeros(&out_shape, y.dtype(), client.device()));
    }

    let sums = pair_sums(client, y, dim)?;
    let areas = broadcast_mul(client, &sums, dx, CONTEXT)?;
    let running = client.cumsum(&areas, dim as isize)?;
    Ok(client.div_scalar(&running, 2.0)?)
}

/// `cumsum(dx / 2 * (y[:-1] + y[1:]))` along `dim`.
pub fn cumulative_trapezoid_constant<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: f64,
    dim: usize,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    if y.shape()[dim] < 2 {
        let empty_shape = with_dim_len(y.shape(), dim, 0);
        return Ok(Tensor::<R>::zeros(&empty_shape, y.dtype(), client.device()));
    }

    let sums = pair_sums(client, y, dim)?;
    let areas = client.mul_scalar(&sums, dx / 2.0)?;
    Ok(client.cumsum(&areas, dim as isize)?)
}
