//! trapz - Trapezoidal integration of sampled tensors
//!
//! trapz computes definite and cumulative integrals of function values held in
//! n-dimensional tensors, along any axis, using the composite trapezoidal rule.
//! Built on numr's tensor primitives, it works across all backends (CPU, CUDA,
//! WebGPU).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      trapz                               │
//! │  (axis normalization, spacing, trapezoid, cumulative)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │   (tensors, slicing, broadcasting, sum, cumsum)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`integrate`] - Trapezoidal and cumulative trapezoidal integration
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//! | `wgpu`  | Enable WebGPU cross-platform GPU | numr/wgpu |
//!
//! ## Backend Limitations
//!
//! - **WebGPU**: Only supports F32 precision (no F64)
//! - **CUDA**: Requires CUDA 12.x toolkit installed
//!
//! # Logging
//!
//! Entry points emit `tracing` events under the `trapz` target. Install a
//! subscriber in the application to see them.
//!
//! # Example
//!
//! ```ignore
//! use trapz::{Spacing, TrapezoidAlgorithms};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let y = Tensor::from_slice(&[1.0, 2.0, 3.0], &[3], &device);
//! let total = client.trapezoid(&y, Spacing::Uniform(1.0), 0)?;            // 4.0
//! let running = client.cumulative_trapezoid(&y, Spacing::Uniform(1.0), 0)?; // [1.5, 4.0]
//! ```

pub mod integrate;

pub use integrate::{IntegrateError, IntegrateResult, Spacing, TrapezoidAlgorithms};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
