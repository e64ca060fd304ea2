//! WebGPU implementation of trapezoidal integration.

use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
use crate::integrate::{Spacing, TrapezoidAlgorithms};

impl TrapezoidAlgorithms<WgpuRuntime> for WgpuClient {
    fn trapezoid(
        &self,
        y: &Tensor<WgpuRuntime>,
        spacing: Spacing<'_, WgpuRuntime>,
        dim: isize,
    ) -> IntegrateResult<Tensor<WgpuRuntime>> {
        trapezoid_impl(self, y, spacing, dim)
    }

    fn cumulative_trapezoid(
        &self,
        y: &Tensor<WgpuRuntime>,
        spacing: Spacing<'_, WgpuRuntime>,
        dim: isize,
    ) -> IntegrateResult<Tensor<WgpuRuntime>> {
        cumulative_trapezoid_impl(self, y, spacing, dim)
    }
}
