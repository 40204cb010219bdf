/// Parallel projection of 3D points onto the z = 0 plane
use nalgebra::{Matrix4, Point2, Point3};
use serde::Serialize;

use crate::geometry::VERTEX_COUNT;
use crate::transform::{ShearCoefficients, Transform};

/// Tolerance within which matrix and direct oblique projection must agree
pub const MATRIX_TOLERANCE: f64 = 1e-10;

/// Projection mode for measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectionMode {
    Orthogonal,
    Oblique(ShearCoefficients),
}

impl ProjectionMode {
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        match self {
            ProjectionMode::Orthogonal => project_orthogonal(point),
            ProjectionMode::Oblique(shear) => project_oblique(point, shear),
        }
    }

    /// Project all eight vertices of a cuboid
    pub fn project_vertices(&self, vertices: &[Point3<f64>; VERTEX_COUNT]) -> [Point2<f64>; VERTEX_COUNT] {
        vertices.map(|v| self.project(&v))
    }

    /// The homogeneous matrix equivalent of this projection
    pub fn matrix(&self) -> Matrix4<f64> {
        match self {
            ProjectionMode::Orthogonal => Transform::orthogonal_matrix(),
            ProjectionMode::Oblique(shear) => Transform::shear_projection_matrix(shear),
        }
    }

    pub fn shear(&self) -> ShearCoefficients {
        match self {
            ProjectionMode::Orthogonal => ShearCoefficients::zero(),
            ProjectionMode::Oblique(shear) => *shear,
        }
    }
}

/// Drop depth: `(x, y, z) -> (x, y)`
pub fn project_orthogonal(point: &Point3<f64>) -> Point2<f64> {
    Point2::new(point.x, point.y)
}

/// Shear depth into the plane: `(x, y, z) -> (x - kx·z, y - ky·z)`
pub fn project_oblique(point: &Point3<f64>, shear: &ShearCoefficients) -> Point2<f64> {
    Point2::new(
        point.x - shear.kx() * point.z,
        point.y - shear.ky() * point.z,
    )
}

/// Batch oblique projection through the homogeneous shear matrix.
///
/// Gives the same points as [`project_oblique`] within [`MATRIX_TOLERANCE`].
pub fn project_matrix(vertices: &[Point3<f64>], shear: &ShearCoefficients) -> Vec<Point2<f64>> {
    let matrix = Transform::shear_projection_matrix(shear);
    vertices
        .iter()
        .map(|v| {
            let h = matrix * v.to_homogeneous();
            // The matrix keeps w = 1; divide anyway to stay a true homogeneous map
            Point2::new(h.x / h.w, h.y / h.w)
        })
        .collect()
}

/// Largest per-coordinate difference between two projected point sets.
///
/// Returns `f64::INFINITY` when the sets differ in length.
pub fn max_deviation(a: &[Point2<f64>], b: &[Point2<f64>]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(p, q)| (p.x - q.x).abs().max((p.y - q.y).abs()))
        .fold(0.0, f64::max)
}
