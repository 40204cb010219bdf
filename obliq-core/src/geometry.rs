/// Rectangular solids and their fixed vertex/face layout
use std::fmt;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};

/// Number of vertices of a cuboid.
pub const VERTEX_COUNT: usize = 8;

/// The six faces of a cuboid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceKind {
    Bottom,
    Top,
    Front,
    Back,
    Left,
    Right,
}

impl FaceKind {
    pub const ALL: [FaceKind; 6] = [
        FaceKind::Bottom,
        FaceKind::Top,
        FaceKind::Front,
        FaceKind::Back,
        FaceKind::Left,
        FaceKind::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FaceKind::Bottom => "bottom",
            FaceKind::Top => "top",
            FaceKind::Front => "front",
            FaceKind::Back => "back",
            FaceKind::Left => "left",
            FaceKind::Right => "right",
        }
    }

    /// Vertex indices of this face, in the order used for area computation
    pub fn indices(self) -> [usize; 4] {
        match self {
            FaceKind::Bottom => [0, 1, 2, 3],
            FaceKind::Top => [4, 5, 6, 7],
            FaceKind::Front => [0, 1, 5, 4],
            FaceKind::Back => [2, 3, 7, 6],
            FaceKind::Left => [0, 3, 7, 4],
            FaceKind::Right => [1, 2, 6, 5],
        }
    }

    pub fn face(self) -> Face {
        Face {
            kind: self,
            indices: self.indices(),
        }
    }
}

impl fmt::Display for FaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named quadrilateral face, as indices into a cuboid's vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Face {
    pub kind: FaceKind,
    pub indices: [usize; 4],
}

impl Face {
    /// Pick this face's corners out of a vertex (or projected vertex) array.
    pub fn corners<T: Copy>(&self, vertices: &[T; VERTEX_COUNT]) -> [T; 4] {
        self.indices.map(|i| vertices[i])
    }
}

/// An axis-aligned rectangular solid with one corner at the origin.
///
/// Vertex layout:
///
/// ```text
///   index  position        index  position
///   0      (0, 0, 0)       4      (0, 0, h)
///   1      (l, 0, 0)       5      (l, 0, h)
///   2      (l, w, 0)       6      (l, w, h)
///   3      (0, w, 0)       7      (0, w, h)
/// ```
///
/// The bottom face 0-3 runs counter-clockwise seen from +z; the top face
/// 4-7 sits directly above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Cuboid {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn cube(edge: f64) -> Self {
        Self::new(edge, edge, edge)
    }

    pub fn is_cube(&self) -> bool {
        self.length == self.width && self.width == self.height
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// True (unprojected) area of one face
    pub fn face_area(&self, kind: FaceKind) -> f64 {
        match kind {
            FaceKind::Bottom | FaceKind::Top => self.length * self.width,
            FaceKind::Front | FaceKind::Back => self.length * self.height,
            FaceKind::Left | FaceKind::Right => self.width * self.height,
        }
    }

    /// Reject negative or non-finite dimensions, and solids whose face
    /// areas overflow.
    ///
    /// Zero is accepted: it yields a flattened solid with zero-area faces.
    pub fn validate(&self) -> ProjectionResult<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProjectionError::InvalidDimension { name, value });
            }
        }
        let total: f64 = FaceKind::ALL.iter().map(|&kind| self.face_area(kind)).sum();
        if !total.is_finite() {
            return Err(ProjectionError::NonFiniteArea { what: "face" });
        }
        Ok(())
    }

    pub fn vertices(&self) -> [Point3<f64>; VERTEX_COUNT] {
        let (l, w, h) = (self.length, self.width, self.height);
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(l, 0.0, 0.0),
            Point3::new(l, w, 0.0),
            Point3::new(0.0, w, 0.0),
            Point3::new(0.0, 0.0, h),
            Point3::new(l, 0.0, h),
            Point3::new(l, w, h),
            Point3::new(0.0, w, h),
        ]
    }

    pub fn faces(&self) -> [Face; 6] {
        FaceKind::ALL.map(FaceKind::face)
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::cube(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        let cuboid = Cuboid::new(10.0, 6.0, 4.0);
        let v = cuboid.vertices();

        assert_eq!(v[0], Point3::origin());
        assert_eq!(v[2], Point3::new(10.0, 6.0, 0.0));
        // Top vertices sit directly above the bottom ones
        for i in 0..4 {
            assert_eq!(v[i + 4].x, v[i].x);
            assert_eq!(v[i + 4].y, v[i].y);
            assert_eq!(v[i].z, 0.0);
            assert_eq!(v[i + 4].z, 4.0);
        }
    }

    #[test]
    fn test_faces_lie_on_box_planes() {
        let cuboid = Cuboid::new(3.0, 5.0, 7.0);
        let vertices = cuboid.vertices();

        for face in cuboid.faces() {
            let corners = face.corners(&vertices);
            let constant = |f: fn(&Point3<f64>) -> f64| corners.iter().all(|p| f(p) == f(&corners[0]));
            let planar = match face.kind {
                FaceKind::Bottom | FaceKind::Top => constant(|p| p.z),
                FaceKind::Front | FaceKind::Back => constant(|p| p.y),
                FaceKind::Left | FaceKind::Right => constant(|p| p.x),
            };
            assert!(planar, "{} face is not axis-aligned", face.kind);
        }
    }

    #[test]
    fn test_every_vertex_used_three_times() {
        let mut counts = [0; VERTEX_COUNT];
        for face in Cuboid::cube(1.0).faces() {
            for i in face.indices {
                counts[i] += 1;
            }
        }
        assert_eq!(counts, [3; VERTEX_COUNT]);
    }

    #[test]
    fn test_cube_measurements() {
        let cube = Cuboid::cube(4.0);
        assert!(cube.is_cube());
        assert_eq!(cube.volume(), 64.0);
        assert_eq!(cube.face_area(FaceKind::Left), 16.0);
        assert!(!Cuboid::new(10.0, 6.0, 4.0).is_cube());
    }

    #[test]
    fn test_validate() {
        assert!(Cuboid::new(10.0, 0.0, 4.0).validate().is_ok());
        assert_eq!(
            Cuboid::new(1.0, 1.0, -2.0).validate(),
            Err(ProjectionError::InvalidDimension {
                name: "height",
                value: -2.0
            })
        );
        assert!(Cuboid::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert_eq!(
            Cuboid::cube(1e200).validate(),
            Err(ProjectionError::NonFiniteArea { what: "face" })
        );
        assert!(Cuboid::cube(1e150).validate().is_ok());
    }
}
