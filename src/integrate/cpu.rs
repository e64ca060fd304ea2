//! CPU implementation of trapezoidal integration.

use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
use crate::integrate::{Spacing, TrapezoidAlgorithms};

impl TrapezoidAlgorithms<CpuRuntime> for CpuClient {
    fn trapezoid(
        &self,
        y: &Tensor<CpuRuntime>,
        spacing: Spacing<'_, CpuRuntime>,
        dim: isize,
    ) -> IntegrateResult<Tensor<CpuRuntime>> {
        trapezoid_impl(self, y, spacing, dim)
    }

    fn cumulative_trapezoid(
        &self,
        y: &Tensor<CpuRuntime>,
        spacing: Spacing<'_, CpuRuntime>,
        dim: isize,
    ) -> IntegrateResult<Tensor<CpuRuntime>> {
        cumulative_trapezoid_impl(self, y, spacing, dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::dtype::DType;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuDevice, CpuClient) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (device, client)
    }

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (lhs, rhs) in a.iter().zip(b) {
            assert!((lhs - rhs).abs() < tol, "{} != {}", lhs, rhs);
        }
    }

    /// Smooth, non-symmetric values for a [2, 3, 4] tensor.
    fn sample_cube(device: &CpuDevice) -> Tensor<CpuRuntime> {
        let data: Vec<f64> = (0..24)
            .map(|i| (i as f64 * 0.37).sin() + 0.1 * i as f64)
            .collect();
        Tensor::<CpuRuntime>::from_slice(&data, &[2, 3, 4], device)
    }

    #[test]
    fn test_trapezoid_cpu() {
        let (device, client) = setup();

        // Integrate y = x^2 from 0 to 1
        let n = 101;
        let x_data: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let y_data: Vec<f64> = x_data.iter().map(|&xi| xi * xi).collect();

        let x = Tensor::<CpuRuntime>::from_slice(&x_data, &[n], &device);
        let y = Tensor::<CpuRuntime>::from_slice(&y_data, &[n], &device);

        let result = client.trapezoid(&y, Spacing::Samples(&x), 0).unwrap();
        let result_val: Vec<f64> = result.to_vec();

        // Exact value is 1/3
        assert!((result_val[0] - 1.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_uniform_matches_filled_coordinates() {
        let (device, client) = setup();
        let y = sample_cube(&device);
        let h = 0.3;

        let shape = y.shape().to_vec();

        for (dim, &len) in shape.iter().enumerate() {
            let x_data: Vec<f64> = (0..len).map(|i| i as f64 * h).collect();
            let x = Tensor::<CpuRuntime>::from_slice(&x_data, &[len], &device);

            let uniform = client
                .trapezoid(&y, Spacing::Uniform(h), dim as isize)
                .unwrap();
            let general = client
                .trapezoid(&y, Spacing::Samples(&x), dim as isize)
                .unwrap();

            assert_eq!(uniform.shape(), general.shape());
            let a: Vec<f64> = uniform.to_vec();
            let b: Vec<f64> = general.to_vec();
            assert_close(&a, &b, 1e-10);
        }
    }

    #[test]
    fn test_cumulative_ends_at_definite_integral() {
        let (device, client) = setup();
        let y = sample_cube(&device);

        for dim in 0..3 {
            let len = y.shape()[dim];
            let x_data: Vec<f64> = (0..len).map(|i| (i * i) as f64 * 0.5).collect();
            let x = Tensor::<CpuRuntime>::from_slice(&x_data, &[len], &device);

            for spacing in [Spacing::Uniform(0.7), Spacing::Samples(&x)] {
                let total = client.trapezoid(&y, spacing, dim as isize).unwrap();
                let running = client
                    .cumulative_trapezoid(&y, spacing, dim as isize)
                    .unwrap();

                assert_eq!(running.shape()[dim], len - 1);
                let last = running
                    .narrow(dim as isize, len - 2, 1)
                    .unwrap()
                    .contiguous();

                let a: Vec<f64> = last.to_vec();
                let b: Vec<f64> = total.to_vec();
                assert_close(&a, &b, 1e-10);
            }
        }
    }

    #[test]
    fn test_negative_dim_matches_positive() {
        let (device, client) = setup();
        let y = sample_cube(&device);

        for dim in 0..3isize {
            let pos = client.trapezoid(&y, Spacing::Uniform(1.5), dim).unwrap();
            let neg = client
                .trapezoid(&y, Spacing::Uniform(1.5), dim - 3)
                .unwrap();

            assert_eq!(pos.shape(), neg.shape());
            let a: Vec<f64> = pos.to_vec();
            let b: Vec<f64> = neg.to_vec();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_lower_rank_coordinate_grid() {
        let (device, client) = setup();
        let y = sample_cube(&device);

        // x of shape [3, 4] broadcasts over the leading batch axis of y
        let x_data: Vec<f64> = (0..12).map(|i| i as f64 * 0.25).collect();
        let x = Tensor::<CpuRuntime>::from_slice(&x_data, &[3, 4], &device);

        // Along the last axis every row of x has spacing 0.25
        let grid = client.trapezoid(&y, Spacing::Samples(&x), 2).unwrap();
        let uniform = client.trapezoid(&y, Spacing::Uniform(0.25), 2).unwrap();
        assert_eq!(grid.shape(), &[2, 3]);
        let a: Vec<f64> = grid.to_vec();
        let b: Vec<f64> = uniform.to_vec();
        assert_close(&a, &b, 1e-10);

        // Along axis 1 the columns of x step by 1.0
        let grid = client.trapezoid(&y, Spacing::Samples(&x), 1).unwrap();
        let uniform = client.trapezoid(&y, Spacing::Uniform(1.0), 1).unwrap();
        assert_eq!(grid.shape(), &[2, 4]);
        let a: Vec<f64> = grid.to_vec();
        let b: Vec<f64> = uniform.to_vec();
        assert_close(&a, &b, 1e-10);
    }

    #[test]
    fn test_empty_axis_with_coordinates() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::zeros(&[3, 0], DType::F64, &device);
        let x = Tensor::<CpuRuntime>::zeros(&[0], DType::F64, &device);

        let result = client.trapezoid(&y, Spacing::Samples(&x), 1).unwrap();
        assert_eq!(result.shape(), &[3]);
        let values: Vec<f64> = result.to_vec();
        assert_eq!(values, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_trapz_alias_and_default_spacing() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0], &[3], &device);
        let a: Vec<f64> = client.trapz(&y, Spacing::default(), 0).unwrap().to_vec();
        let b: Vec<f64> = client.trapezoid(&y, Spacing::Uniform(1.0), 0).unwrap().to_vec();

        assert_eq!(a, b);
        assert!((a[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_bool_rejected_before_empty_guard() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::zeros(&[0], DType::Bool, &device);
        let err = client.trapezoid(&y, Spacing::Uniform(1.0), 0).unwrap_err();
        assert!(err.is_type_error());
    }
}
