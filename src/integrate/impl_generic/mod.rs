//! Generic implementations of trapezoidal integration.
//!
//! These implementations work across all Runtime backends by using
//! numr's tensor operations.

pub mod cumulative;
pub mod shape;
pub mod spacing;
pub mod trapezoid;

pub use cumulative::cumulative_trapezoid_impl;
pub use trapezoid::trapezoid_impl;
