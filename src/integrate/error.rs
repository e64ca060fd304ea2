//! Error types for trapezoidal integration.

use std::fmt;

use numr::dtype::DType;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during integration.
#[derive(Debug, Clone)]
pub enum IntegrateError {
    /// Element type is not supported (boolean samples or coordinates).
    UnsupportedDType { dtype: DType, context: String },

    /// Coordinate count does not match the number of samples along the axis.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Spacing cannot be broadcast against the sample intervals.
    BroadcastMismatch {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        context: String,
    },

    /// Integration axis is outside `[-ndim, ndim)`.
    AxisOutOfBounds {
        dim: isize,
        ndim: usize,
        context: String,
    },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl IntegrateError {
    /// Invalid element type for `y`, `x` or the spacing.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::UnsupportedDType { .. })
    }

    /// Incompatible shapes between samples and coordinates.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. } | Self::BroadcastMismatch { .. }
        )
    }

    /// Axis index out of range.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::AxisOutOfBounds { .. })
    }
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDType { dtype, context } => {
                write!(f, "Unsupported dtype {:?} in {}", dtype, context)
            }
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {} sample points, got {}",
                    context, expected, actual
                )
            }
            Self::BroadcastMismatch { lhs, rhs, context } => {
                write!(
                    f,
                    "Cannot broadcast shapes {:?} and {:?} in {}",
                    lhs, rhs, context
                )
            }
            Self::AxisOutOfBounds { dim, ndim, context } => {
                write!(
                    f,
                    "Dimension {} out of range for {}-D tensor in {}",
                    dim, ndim, context
                )
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for IntegrateError {}

impl From<numr::error::Error> for IntegrateError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let type_err = IntegrateError::UnsupportedDType {
            dtype: DType::Bool,
            context: "trapezoid".to_string(),
        };
        assert!(type_err.is_type_error());
        assert!(!type_err.is_shape_error());

        let shape_err = IntegrateError::ShapeMismatch {
            expected: 3,
            actual: 4,
            context: "trapezoid".to_string(),
        };
        assert!(shape_err.is_shape_error());

        let axis_err = IntegrateError::AxisOutOfBounds {
            dim: 2,
            ndim: 2,
            context: "cumulative_trapezoid".to_string(),
        };
        assert!(axis_err.is_index_error());
        assert!(!axis_err.is_type_error());
    }

    #[test]
    fn test_error_display() {
        let err = IntegrateError::ShapeMismatch {
            expected: 3,
            actual: 4,
            context: "trapezoid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch in trapezoid: expected 3 sample points, got 4"
        );

        let err = IntegrateError::AxisOutOfBounds {
            dim: -3,
            ndim: 2,
            context: "trapezoid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Dimension -3 out of range for 2-D tensor in trapezoid"
        );
    }
}
