/// Measurements on projected cuboids.
///
/// Face areas come from the shoelace formula applied to each face's four
/// projected corners in stored order. A face counts as visible when its
/// projected area exceeds [`VISIBILITY_THRESHOLD`]. This is an area
/// heuristic, not back-face culling: a face seen edge-on has zero area and
/// is hidden, any face with a non-degenerate outline is visible.
use std::collections::BTreeMap;

use nalgebra::Point2;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::geometry::{Cuboid, Face, FaceKind};
use crate::projection::ProjectionMode;

/// Projected area (source units²) above which a face is reported visible
pub const VISIBILITY_THRESHOLD: f64 = 0.01;

/// Signed shoelace area of a closed polygon.
///
/// Positive for counter-clockwise vertex order, negative for clockwise,
/// zero for fewer than three points.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned shoelace area of a closed polygon
pub fn polygon_area(points: &[Point2<f64>]) -> f64 {
    signed_area(points).abs()
}

/// Projected area of one face
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceArea {
    pub area: f64,
    pub signed_area: f64,
    pub visible: bool,
}

impl FaceArea {
    pub fn from_outline(outline: &[Point2<f64>]) -> Self {
        let signed_area = signed_area(outline);
        let area = signed_area.abs();
        Self {
            area,
            signed_area,
            visible: area > VISIBILITY_THRESHOLD,
        }
    }
}

/// Per-face projected areas for one projection of one cuboid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceReport {
    pub mode: ProjectionMode,
    pub faces: BTreeMap<FaceKind, FaceArea>,
}

impl FaceReport {
    pub fn get(&self, kind: FaceKind) -> Option<&FaceArea> {
        self.faces.get(&kind)
    }

    /// Area of a face, zero if the face is absent from the report
    pub fn area(&self, kind: FaceKind) -> f64 {
        self.get(kind).map_or(0.0, |f| f.area)
    }

    pub fn visible_count(&self) -> usize {
        self.faces.values().filter(|f| f.visible).count()
    }

    pub fn total_visible_area(&self) -> f64 {
        self.faces
            .values()
            .filter(|f| f.visible)
            .map(|f| f.area)
            .sum()
    }

    pub fn visible_faces(&self) -> impl Iterator<Item = FaceKind> + '_ {
        self.faces
            .iter()
            .filter(|(_, f)| f.visible)
            .map(|(kind, _)| *kind)
    }
}

/// Project a cuboid and measure the area of each of its faces.
pub fn face_report(cuboid: &Cuboid, mode: ProjectionMode) -> FaceReport {
    face_report_for(cuboid, cuboid.faces(), mode)
}

/// Project a cuboid and measure only the given faces.
///
/// Faces not in `faces` are absent from the report; a face listed twice is
/// measured once.
#[instrument(level = "debug", skip(cuboid, faces), fields(length = cuboid.length, width = cuboid.width, height = cuboid.height))]
pub fn face_report_for(cuboid: &Cuboid, faces: impl IntoIterator<Item = Face>, mode: ProjectionMode) -> FaceReport {
    let projected = mode.project_vertices(&cuboid.vertices());

    let faces = faces
        .into_iter()
        .map(|face| {
            let measured = FaceArea::from_outline(&face.corners(&projected));
            debug!(face = face.kind.name(), area = measured.area, visible = measured.visible, "measured face");
            (face.kind, measured)
        })
        .collect();

    FaceReport { mode, faces }
}

/// Projected lengths of the cuboid's reference edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedDimensions {
    /// Edge 0 → 1
    pub base_length: f64,
    /// Edge 0 → 3
    pub base_width: f64,
    /// Edge 4 → 5
    pub top_length: f64,
    /// Edge 4 → 7
    pub top_width: f64,
    /// Vertical edge 0 → 4
    pub height_projection: f64,
}

pub fn projected_dimensions(cuboid: &Cuboid, mode: ProjectionMode) -> ProjectedDimensions {
    let p = mode.project_vertices(&cuboid.vertices());
    let span = |a: usize, b: usize| (p[b] - p[a]).norm();

    ProjectedDimensions {
        base_length: span(0, 1),
        base_width: span(0, 3),
        top_length: span(4, 5),
        top_width: span(4, 7),
        height_projection: span(0, 4),
    }
}

/// Projected lengths of the bottom face edges AB, BC, CD, DA
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeLengths {
    pub lengths: [f64; 4],
}

impl EdgeLengths {
    pub const NAMES: [&'static str; 4] = ["AB", "BC", "CD", "DA"];

    pub fn mean(&self) -> f64 {
        self.lengths.iter().sum::<f64>() / 4.0
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::NAMES.into_iter().zip(self.lengths)
    }
}

pub fn bottom_edge_lengths(cuboid: &Cuboid, mode: ProjectionMode) -> EdgeLengths {
    let p = mode.project_vertices(&cuboid.vertices());
    let [a, b, c, d] = FaceKind::Bottom.indices();

    EdgeLengths {
        lengths: [
            (p[b] - p[a]).norm(),
            (p[c] - p[b]).norm(),
            (p[d] - p[c]).norm(),
            (p[a] - p[d]).norm(),
        ],
    }
}
