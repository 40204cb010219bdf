/// Error types for projection and measurement
use thiserror::Error;

/// Result type alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised when projection parameters leave the defined domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The projection angle makes `tan` or `1/cos` undefined.
    #[error("projection angle {degrees}° is outside the open interval (-90°, 90°)")]
    AngleOutOfDomain { degrees: f64 },

    #[error("projection angle is not a finite number")]
    NonFiniteAngle,

    #[error("shear coefficients must be finite (kx = {kx}, ky = {ky})")]
    NonFiniteCoefficient { kx: f64, ky: f64 },

    /// A cuboid dimension is negative or not finite.
    #[error("invalid {name} {value}: dimensions must be finite and non-negative")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Areas overflowed: the solid or the shear is too large for `f64`.
    #[error("{what} area is not finite")]
    NonFiniteArea { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectionError::AngleOutOfDomain { degrees: 90.0 };
        assert!(err.to_string().contains("90°"));

        let err = ProjectionError::NonFiniteCoefficient {
            kx: f64::INFINITY,
            ky: 0.0,
        };
        assert!(err.to_string().contains("kx = inf"));

        let err = ProjectionError::InvalidDimension {
            name: "height",
            value: -1.0,
        };
        assert!(err.to_string().contains("height -1"));

        let err = ProjectionError::NonFiniteArea { what: "oblique" };
        assert_eq!(err.to_string(), "oblique area is not finite");
    }
}
