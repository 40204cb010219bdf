/// Shear coefficients and the homogeneous oblique projection matrix
use std::f64::consts::FRAC_PI_4;

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ProjectionError, ProjectionResult};

/// How an oblique angle is split into x and y shear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObliqueStyle {
    /// Equal x and y offset: `kx = ky = tan(θ)·cos(45°)`
    Isometric,
    /// x offset only: `kx = tan(θ)`
    Dimetric,
    /// 3:1 split: `kx = 0.75·tan(θ)`, `ky = 0.25·tan(θ)`
    Trimetric,
    /// Single-axis lean toward +x: `kx = -tan(θ)`, so that `x' = x + tan(θ)·z`
    Slant,
}

impl ObliqueStyle {
    pub fn name(self) -> &'static str {
        match self {
            ObliqueStyle::Isometric => "isometric",
            ObliqueStyle::Dimetric => "dimetric",
            ObliqueStyle::Trimetric => "trimetric",
            ObliqueStyle::Slant => "slant",
        }
    }
}

/// Displacement per unit of depth along x and y.
///
/// The projection is `x' = x - kx·z`, `y' = y - ky·z`. Coefficients are
/// always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShearCoefficients {
    kx: f64,
    ky: f64,
}

impl ShearCoefficients {
    pub fn new(kx: f64, ky: f64) -> ProjectionResult<Self> {
        if !kx.is_finite() || !ky.is_finite() {
            return Err(ProjectionError::NonFiniteCoefficient { kx, ky });
        }
        Ok(Self { kx, ky })
    }

    /// No shear: oblique projection degenerates to orthogonal.
    pub fn zero() -> Self {
        Self { kx: 0.0, ky: 0.0 }
    }

    /// Derive coefficients from a projection angle in degrees.
    pub fn from_angle(angle_degrees: f64, style: ObliqueStyle) -> ProjectionResult<Self> {
        let t = checked_angle(angle_degrees)?.tan();
        let (kx, ky) = match style {
            ObliqueStyle::Isometric => (t * FRAC_PI_4.cos(), t * FRAC_PI_4.sin()),
            ObliqueStyle::Dimetric => (t, 0.0),
            ObliqueStyle::Trimetric => (t * 0.75, t * 0.25),
            ObliqueStyle::Slant => (-t, 0.0),
        };
        debug!(angle_degrees, style = style.name(), kx, ky, "derived shear coefficients");
        Self::new(kx, ky)
    }

    pub fn kx(&self) -> f64 {
        self.kx
    }

    pub fn ky(&self) -> f64 {
        self.ky
    }

    pub fn is_zero(&self) -> bool {
        self.kx == 0.0 && self.ky == 0.0
    }
}

impl Default for ShearCoefficients {
    fn default() -> Self {
        Self::zero()
    }
}

/// Validate an angle in degrees and convert it to radians.
///
/// Angles at or beyond ±90° have no finite tangent and no usable `1/cos`.
pub fn checked_angle(angle_degrees: f64) -> ProjectionResult<f64> {
    if !angle_degrees.is_finite() {
        warn!("rejected non-finite projection angle");
        return Err(ProjectionError::NonFiniteAngle);
    }
    if angle_degrees.abs() >= 90.0 {
        warn!(angle_degrees, "rejected projection angle outside (-90°, 90°)");
        return Err(ProjectionError::AngleOutOfDomain {
            degrees: angle_degrees,
        });
    }
    Ok(angle_degrees.to_radians())
}

/// Theoretical deformation ratio `1/cos(θ)` for an angle in degrees.
pub fn theoretical_ratio(angle_degrees: f64) -> ProjectionResult<f64> {
    Ok(1.0 / checked_angle(angle_degrees)?.cos())
}

/// Transform builder for projection matrices
pub struct Transform;

impl Transform {
    /// Homogeneous shear-projection matrix acting on `[x, y, z, 1]ᵀ`.
    ///
    /// The z row is zeroed, so every point lands on the z = 0 plane with w = 1.
    #[rustfmt::skip]
    pub fn shear_projection_matrix(shear: &ShearCoefficients) -> Matrix4<f64> {
        Matrix4::new(
            1.0, 0.0, -shear.kx, 0.0,
            0.0, 1.0, -shear.ky, 0.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Orthogonal projection onto z = 0
    pub fn orthogonal_matrix() -> Matrix4<f64> {
        Self::shear_projection_matrix(&ShearCoefficients::zero())
    }
}
