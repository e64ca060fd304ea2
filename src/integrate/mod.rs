//! Trapezoidal integration of sampled tensors.
//!
//! Integrates function values stored in an n-dimensional `Tensor<R>` along
//! one axis, either over a uniform spacing or over explicit sample
//! coordinates.
//!
//! # Operations
//!
//! - [`TrapezoidAlgorithms::trapezoid`] - Definite integral; removes the axis
//! - [`TrapezoidAlgorithms::cumulative_trapezoid`] - Running integral; shortens
//!   the axis by one
//! - [`TrapezoidAlgorithms::trapz`] - Alias for `trapezoid`
//!
//! # Spacing
//!
//! [`Spacing::Uniform`] uses `(sum(y) - (y[0] + y[n-1]) / 2) * dx` and never
//! builds per-interval widths. [`Spacing::Samples`] takes coordinates `x`:
//!
//! - 1-D `x` needs one value per sample and is laid along the axis
//! - lower-rank `x` is padded with leading unit dimensions
//! - otherwise `x` must broadcast against `y` as-is
//!
//! # Example
//!
//! ```ignore
//! use trapz::integrate::{Spacing, TrapezoidAlgorithms};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! // Integrate each row of a [2, 5] tensor over x in [0, 1]
//! let x = Tensor::from_slice(&[0.0, 0.25, 0.5, 0.75, 1.0], &[5], &device);
//! let y = Tensor::from_slice(&y_data, &[2, 5], &device);
//! let per_row = client.trapezoid(&y, Spacing::Samples(&x), -1)?;
//! ```

mod cpu;
#[cfg(feature = "cuda")]
mod cuda;
pub mod error;
pub mod impl_generic;
pub mod traits;
#[cfg(feature = "wgpu")]
mod wgpu;

pub use error::{IntegrateError, IntegrateResult};
pub use traits::{Spacing, TrapezoidAlgorithms};
