//! Trait definitions and types for trapezoidal integration.

mod algorithms;
mod types;

pub use algorithms::TrapezoidAlgorithms;
pub use types::Spacing;
