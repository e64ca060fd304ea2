//! Types for trapezoidal integration.

use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Spacing between consecutive samples along the integration axis.
///
/// `Uniform` takes the fast path that never materializes per-interval
/// widths. `Samples` holds explicit coordinates: a 1-D tensor with one value
/// per sample point, or a grid that broadcasts against `y`.
pub enum Spacing<'a, R: Runtime> {
    /// Same interval width everywhere.
    Uniform(f64),
    /// Sample coordinates; widths are their consecutive differences.
    Samples(&'a Tensor<R>),
}

impl<'a, R: Runtime> Spacing<'a, R> {
    /// Uniform spacing of `dx`.
    pub fn uniform(dx: f64) -> Self {
        Self::Uniform(dx)
    }

    /// Explicit sample coordinates.
    pub fn samples(x: &'a Tensor<R>) -> Self {
        Self::Samples(x)
    }

    /// Returns true for the scalar spacing variant.
    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }
}

impl<R: Runtime> Clone for Spacing<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Runtime> Copy for Spacing<'_, R> {}

impl<R: Runtime> Default for Spacing<'_, R> {
    /// Unit spacing.
    fn default() -> Self {
        Self::Uniform(1.0)
    }
}

impl<'a, R: Runtime> From<&'a Tensor<R>> for Spacing<'a, R> {
    fn from(x: &'a Tensor<R>) -> Self {
        Self::Samples(x)
    }
}

impl<R: Runtime> From<f64> for Spacing<'_, R> {
    fn from(dx: f64) -> Self {
        Self::Uniform(dx)
    }
}
