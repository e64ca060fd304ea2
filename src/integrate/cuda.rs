//! CUDA implementation of trapezoidal integration.

use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
use crate::integrate::{Spacing, TrapezoidAlgorithms};

impl TrapezoidAlgorithms<CudaRuntime> for CudaClient {
    fn trapezoid(
        &self,
        y: &Tensor<CudaRuntime>,
        spacing: Spacing<'_, CudaRuntime>,
        dim: isize,
    ) -> IntegrateResult<Tensor<CudaRuntime>> {
        trapezoid_impl(self, y, spacing, dim)
    }

    fn cumulative_trapezoid(
        &self,
        y: &Tensor<CudaRuntime>,
        spacing: Spacing<'_, CudaRuntime>,
        dim: isize,
    ) -> IntegrateResult<Tensor<CudaRuntime>> {
        cumulative_trapezoid_impl(self, y, spacing, dim)
    }
}
