use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;

use super::Spacing;

/// Trait for trapezoidal integration that works across all Runtime backends.
///
/// Both operations integrate `y` along `dim` (negative values count from the
/// last dimension) using either a uniform spacing or explicit sample
/// coordinates.
///
/// # Example
///
/// ```ignore
/// use trapz::integrate::{Spacing, TrapezoidAlgorithms};
/// use numr::runtime::cpu::{CpuClient, CpuDevice};
///
/// let device = CpuDevice::new();
/// let client = CpuClient::new(device.clone());
///
/// let y = Tensor::from_slice(&[1.0, 2.0, 3.0], &[3], &device);
/// let x = Tensor::from_slice(&[0.0, 2.0, 4.0], &[3], &device);
///
/// let total = client.trapezoid(&y, Spacing::Samples(&x), 0)?;        // 8.0
/// let running = client.cumulative_trapezoid(&y, Spacing::Uniform(1.0), 0)?; // [1.5, 4.0]
/// ```
pub trait TrapezoidAlgorithms<R: Runtime> {
    /// Definite integral along `dim` using the composite trapezoidal rule.
    ///
    /// # Arguments
    /// * `y` - Function values
    /// * `spacing` - Uniform interval width or sample coordinates
    /// * `dim` - Integration axis
    ///
    /// # Returns
    /// Tensor with the shape of `y` minus `dim`. A zero-length axis
    /// integrates to zeros. Integer inputs are integrated in F64; mixed
    /// float inputs in the wider of the two dtypes.
    ///
    /// # Errors
    /// * `AxisOutOfBounds` if `dim` is not in `[-ndim, ndim)`
    /// * `UnsupportedDType` for boolean `y` or `x`
    /// * `ShapeMismatch` if a 1-D `x` has the wrong number of points
    /// * `BroadcastMismatch` if `x` cannot be broadcast against `y`
    fn trapezoid(
        &self,
        y: &Tensor<R>,
        spacing: Spacing<'_, R>,
        dim: isize,
    ) -> IntegrateResult<Tensor<R>>;

    /// Running integral along `dim`.
    ///
    /// The result keeps every axis of `y`, with `dim` shortened by one; its
    /// last entry along `dim` equals [`trapezoid`](Self::trapezoid).
    fn cumulative_trapezoid(
        &self,
        y: &Tensor<R>,
        spacing: Spacing<'_, R>,
        dim: isize,
    ) -> IntegrateResult<Tensor<R>>;

    /// Alias for [`trapezoid`](Self::trapezoid).
    fn trapz(
        &self,
        y: &Tensor<R>,
        spacing: Spacing<'_, R>,
        dim: isize,
    ) -> IntegrateResult<Tensor<R>> {
        self.trapezoid(y, spacing, dim)
    }
}
