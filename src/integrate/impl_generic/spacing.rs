//! Interval widths and sample pairing for the trapezoidal rule.

use numr::dtype::DType;
use numr::ops::{TensorOps, TypeConversionOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::traits::Spacing;

use super::shape::{broadcast_shape, pad_leading_dims, place_on_dim, with_dim_len};

/// Resolved spacing: a constant width or one width per interval.
pub enum IntervalWidths<R: Runtime> {
    Constant(f64),
    PerInterval(Tensor<R>),
}

/// Reject boolean tensors.
pub fn ensure_not_bool<R: Runtime>(
    tensor: &Tensor<R>,
    name: &str,
    context: &str,
) -> IntegrateResult<()> {
    let dtype = tensor.dtype();
    if dtype == DType::Bool {
        return Err(IntegrateError::UnsupportedDType {
            dtype,
            context: format!("{}: received a bool input for `{}`", context, name),
        });
    }
    Ok(())
}

/// Validate the element types of `y` and any sample coordinates.
pub fn ensure_numeric<R: Runtime>(
    y: &Tensor<R>,
    spacing: &Spacing<'_, R>,
    context: &str,
) -> IntegrateResult<()> {
    ensure_not_bool(y, "y", context)?;
    if let Spacing::Samples(x) = spacing {
        ensure_not_bool(x, "x", context)?;
    }
    Ok(())
}

/// Floating dtype an input of `dtype` is integrated in.
///
/// Integer samples are widened to F64 so halving the pair sums does not
/// truncate.
pub fn float_dtype(dtype: DType) -> DType {
    match dtype {
        DType::F32 | DType::F64 | DType::Complex64 | DType::Complex128 => dtype,
        _ => DType::F64,
    }
}

/// Common floating dtype for samples and coordinates.
pub fn common_float_dtype(a: DType, b: DType) -> DType {
    let (a, b) = (float_dtype(a), float_dtype(b));
    match (a, b) {
        _ if a == b => a,
        (DType::F32, DType::F64) | (DType::F64, DType::F32) => DType::F64,
        (DType::F32, DType::Complex64) | (DType::Complex64, DType::F32) => DType::Complex64,
        _ => DType::Complex128,
    }
}

/// Cast `y` and any sample coordinates to their common floating dtype.
///
/// Returns the promoted samples and, for [`Spacing::Samples`], the promoted
/// coordinates.
pub fn promote_to_float<R, C>(
    client: &C,
    y: &Tensor<R>,
    spacing: &Spacing<'_, R>,
) -> IntegrateResult<(Tensor<R>, Option<Tensor<R>>)>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    match spacing {
        Spacing::Uniform(_) => {
            let y = cast_to(client, y, float_dtype(y.dtype()))?;
            Ok((y, None))
        }
        Spacing::Samples(x) => {
            let target = common_float_dtype(y.dtype(), x.dtype());
            let y = cast_to(client, y, target)?;
            let x = cast_to(client, x, target)?;
            Ok((y, Some(x)))
        }
    }
}

fn cast_to<R, C>(client: &C, t: &Tensor<R>, dtype: DType) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    if t.dtype() == dtype {
        return Ok(t.clone());
    }
    Ok(client.cast(t, dtype)?)
}

/// Shape under which `x` is viewed so it lines up with `y` along `dim`.
///
/// - 1-D `x` holds one coordinate per sample and is laid along `dim`
/// - lower-rank `x` gets leading unit dimensions
/// - anything else is used as-is
pub fn aligned_coordinate_shape(
    y_shape: &[usize],
    x_shape: &[usize],
    dim: usize,
    context: &str,
) -> IntegrateResult<Vec<usize>> {
    if x_shape.len() == 1 {
        if x_shape[0] != y_shape[dim] {
            return Err(IntegrateError::ShapeMismatch {
                expected: y_shape[dim],
                actual: x_shape[0],
                context: format!(
                    "{}: there must be one `x` value for each sample point",
                    context
                ),
            });
        }
        return Ok(place_on_dim(x_shape[0], dim, y_shape.len()));
    }

    Ok(pad_leading_dims(x_shape, y_shape.len()))
}

/// Resolve `spacing` into interval widths for integrating `y` along `dim`.
///
/// For sample coordinates the widths are `x[1:] - x[:-1]` along `dim`. All
/// shape checks run before any tensor arithmetic.
pub fn interval_widths<R, C>(
    client: &C,
    y: &Tensor<R>,
    spacing: &Spacing<'_, R>,
    dim: usize,
    context: &str,
) -> IntegrateResult<IntervalWidths<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let x = match spacing {
        Spacing::Uniform(dx) => return Ok(IntervalWidths::Constant(*dx)),
        Spacing::Samples(x) => *x,
    };

    let y_shape = y.shape();
    let x_shape = aligned_coordinate_shape(y_shape, x.shape(), dim, context)?;

    let m = x_shape[dim];
    let widths_shape = with_dim_len(&x_shape, dim, m.saturating_sub(1));
    let pairs_shape = with_dim_len(y_shape, dim, y_shape[dim].saturating_sub(1));
    broadcast_shape(&pairs_shape, &widths_shape, context)?;

    if m < 2 {
        let empty = Tensor::<R>::zeros(&widths_shape, x.dtype(), client.device());
        return Ok(IntervalWidths::PerInterval(empty));
    }

    let x_viewed = if x_shape.as_slice() == x.shape() {
        x.clone()
    } else {
        x.reshape(&x_shape)?
    };

    let x_left = x_viewed.narrow(dim as isize, 0, m - 1)?.contiguous();
    let x_right = x_viewed.narrow(dim as isize, 1, m - 1)?.contiguous();
    let widths = client.sub(&x_right, &x_left)?;

    Ok(IntervalWidths::PerInterval(widths))
}

/// `y[:-1] + y[1:]` along `dim`. Requires at least two samples.
pub fn pair_sums<R, C>(client: &C, y: &Tensor<R>, dim: usize) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let n = y.shape()[dim];
    let y_left = y.narrow(dim as isize, 0, n - 1)?.contiguous();
    let y_right = y.narrow(dim as isize, 1, n - 1)?.contiguous();
    Ok(client.add(&y_left, &y_right)?)
}

/// Multiply with broadcasting, expanding both operands to a common shape first.
pub fn broadcast_mul<R, C>(
    client: &C,
    a: &Tensor<R>,
    b: &Tensor<R>,
    context: &str,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let out_shape = broadcast_shape(a.shape(), b.shape(), context)?;
    let a = expand(a, &out_shape)?;
    let b = expand(b, &out_shape)?;
    Ok(client.mul(&a, &b)?)
}

fn expand<R: Runtime>(t: &Tensor<R>, shape: &[usize]) -> IntegrateResult<Tensor<R>> {
    if t.shape() == shape {
        return Ok(t.clone());
    }
    let padded = pad_leading_dims(t.shape(), shape.len());
    Ok(t.reshape(&padded)?.broadcast_to(shape)?.contiguous())
}
