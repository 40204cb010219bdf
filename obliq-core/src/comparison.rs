/// Orthogonal versus oblique comparison reports.
///
/// Two ratios are reported and neither is assumed to match `1/cos(θ)`:
/// the total-area ratio over all visible faces ([`AggregateReport`]) and a
/// per-face ratio ([`FaceComparison`], [`FaceRatioReport`]). Which one the
/// theoretical ratio describes depends on how a face is tilted relative to
/// the shear, so callers decide how to read them.
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{ProjectionError, ProjectionResult};
use crate::geometry::{Cuboid, FaceKind};
use crate::measure::{face_report, FaceReport, VISIBILITY_THRESHOLD};
use crate::projection::ProjectionMode;
use crate::transform::{theoretical_ratio, ObliqueStyle, ShearCoefficients};

/// Style used by [`aggregate_report`]: the single-axis `x' = x + tan(θ)·z` lean
pub const DEFAULT_STYLE: ObliqueStyle = ObliqueStyle::Slant;

/// Visible face count and visible area of one projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionTotals {
    pub visible_face_count: usize,
    pub total_visible_area: f64,
}

impl From<&FaceReport> for ProjectionTotals {
    fn from(report: &FaceReport) -> Self {
        Self {
            visible_face_count: report.visible_count(),
            total_visible_area: report.total_visible_area(),
        }
    }
}

/// How a face's projected area changes from orthogonal to oblique
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FaceChange {
    /// Areas differ by less than the visibility threshold
    Unchanged,
    /// Hidden orthogonally, visible obliquely
    Appeared,
    /// Visible orthogonally, hidden obliquely
    Vanished,
    Grew { percent: f64 },
    Shrank { percent: f64 },
}

impl FaceChange {
    pub fn classify(orthogonal: f64, oblique: f64) -> Self {
        if (orthogonal - oblique).abs() < VISIBILITY_THRESHOLD {
            FaceChange::Unchanged
        } else if oblique > orthogonal {
            if orthogonal < VISIBILITY_THRESHOLD {
                FaceChange::Appeared
            } else {
                FaceChange::Grew {
                    percent: (oblique / orthogonal - 1.0) * 100.0,
                }
            }
        } else if oblique < VISIBILITY_THRESHOLD {
            FaceChange::Vanished
        } else {
            FaceChange::Shrank {
                percent: (orthogonal / oblique - 1.0) * 100.0,
            }
        }
    }
}

/// One face under both projections
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceComparison {
    pub face: FaceKind,
    pub orthogonal_area: f64,
    pub oblique_area: f64,
    /// `oblique / orthogonal`, absent when the face is hidden orthogonally
    pub ratio: Option<f64>,
    pub change: FaceChange,
}

impl FaceComparison {
    fn new(face: FaceKind, orthogonal_area: f64, oblique_area: f64) -> Self {
        let ratio = (orthogonal_area > VISIBILITY_THRESHOLD).then(|| oblique_area / orthogonal_area);
        Self {
            face,
            orthogonal_area,
            oblique_area,
            ratio,
            change: FaceChange::classify(orthogonal_area, oblique_area),
        }
    }
}

/// How closely the measured ratio follows `1/cos(θ)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Agreement {
    /// Error below 0.1
    Close,
    /// Error below 0.5
    Rough,
    Divergent,
}

impl Agreement {
    pub fn grade(error: f64) -> Self {
        if error < 0.1 {
            Agreement::Close
        } else if error < 0.5 {
            Agreement::Rough
        } else {
            Agreement::Divergent
        }
    }
}

/// Whole-solid comparison of the orthogonal and oblique projections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub cuboid: Cuboid,
    pub angle_degrees: f64,
    pub style: ObliqueStyle,
    pub shear: ShearCoefficients,
    pub orthogonal: ProjectionTotals,
    pub oblique: ProjectionTotals,
    pub faces: Vec<FaceComparison>,
    /// `1/cos(θ)`
    pub theoretical_ratio: f64,
    /// Oblique over orthogonal total visible area, 1.0 if nothing is visible orthogonally
    pub actual_ratio: f64,
    pub error: f64,
    pub agreement: Agreement,
}

impl AggregateReport {
    pub fn face(&self, kind: FaceKind) -> Option<&FaceComparison> {
        self.faces.iter().find(|f| f.face == kind)
    }

    /// Faces hidden under orthogonal projection that the oblique one shows
    pub fn revealed_faces(&self) -> impl Iterator<Item = FaceKind> + '_ {
        self.faces
            .iter()
            .filter(|f| f.change == FaceChange::Appeared)
            .map(|f| f.face)
    }
}

/// Measure every face, failing if any area or the visible total overflowed.
fn finite_face_report(cuboid: &Cuboid, mode: ProjectionMode, what: &'static str) -> ProjectionResult<FaceReport> {
    let report = face_report(cuboid, mode);
    let overflowed = report.faces.values().any(|f| !f.area.is_finite()) || !report.total_visible_area().is_finite();
    if overflowed {
        return Err(ProjectionError::NonFiniteArea { what });
    }
    Ok(report)
}

/// Compare projections of `cuboid` using the single-axis [`DEFAULT_STYLE`].
pub fn aggregate_report(cuboid: &Cuboid, angle_degrees: f64) -> ProjectionResult<AggregateReport> {
    aggregate_report_with_style(cuboid, angle_degrees, DEFAULT_STYLE)
}

#[instrument(skip(cuboid), fields(length = cuboid.length, width = cuboid.width, height = cuboid.height))]
pub fn aggregate_report_with_style(
    cuboid: &Cuboid,
    angle_degrees: f64,
    style: ObliqueStyle,
) -> ProjectionResult<AggregateReport> {
    let shear = ShearCoefficients::from_angle(angle_degrees, style)?;
    let theoretical_ratio = theoretical_ratio(angle_degrees)?;

    let orthogonal_report = finite_face_report(cuboid, ProjectionMode::Orthogonal, "orthogonal")?;
    let oblique_report = finite_face_report(cuboid, ProjectionMode::Oblique(shear), "oblique")?;
    let orthogonal = ProjectionTotals::from(&orthogonal_report);
    let oblique = ProjectionTotals::from(&oblique_report);

    let faces = FaceKind::ALL
        .iter()
        .map(|&kind| FaceComparison::new(kind, orthogonal_report.area(kind), oblique_report.area(kind)))
        .collect();

    let actual_ratio = if orthogonal.total_visible_area > 0.0 {
        oblique.total_visible_area / orthogonal.total_visible_area
    } else {
        1.0
    };
    let error = (theoretical_ratio - actual_ratio).abs();
    let agreement = Agreement::grade(error);

    info!(
        orthogonal_visible = orthogonal.visible_face_count,
        oblique_visible = oblique.visible_face_count,
        theoretical_ratio,
        actual_ratio,
        ?agreement,
        "built aggregate report"
    );

    Ok(AggregateReport {
        cuboid: *cuboid,
        angle_degrees,
        style,
        shear,
        orthogonal,
        oblique,
        faces,
        theoretical_ratio,
        actual_ratio,
        error,
        agreement,
    })
}

/// Single-face comparison against the theoretical ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceRatioReport {
    pub face: FaceKind,
    pub true_area: f64,
    pub orthogonal_area: f64,
    pub oblique_area: f64,
    pub theoretical_ratio: f64,
    /// Oblique over orthogonal area of this face, 1.0 when the orthogonal area is zero
    pub actual_ratio: f64,
    pub error: f64,
    pub change: FaceChange,
}

impl FaceRatioReport {
    /// Whether the face keeps its area within the visibility threshold
    pub fn area_preserved(&self) -> bool {
        self.change == FaceChange::Unchanged
    }
}

pub fn face_ratio_report(
    cuboid: &Cuboid,
    angle_degrees: f64,
    style: ObliqueStyle,
    face: FaceKind,
) -> ProjectionResult<FaceRatioReport> {
    let shear = ShearCoefficients::from_angle(angle_degrees, style)?;
    let theoretical_ratio = theoretical_ratio(angle_degrees)?;

    let orthogonal_area = finite_face_report(cuboid, ProjectionMode::Orthogonal, "orthogonal")?.area(face);
    let oblique_area = finite_face_report(cuboid, ProjectionMode::Oblique(shear), "oblique")?.area(face);
    let actual_ratio = if orthogonal_area > 0.0 {
        oblique_area / orthogonal_area
    } else {
        1.0
    };
    debug!(face = face.name(), orthogonal_area, oblique_area, actual_ratio, "face ratio");

    Ok(FaceRatioReport {
        face,
        true_area: cuboid.face_area(face),
        orthogonal_area,
        oblique_area,
        theoretical_ratio,
        actual_ratio,
        error: (theoretical_ratio - actual_ratio).abs(),
        change: FaceChange::classify(orthogonal_area, oblique_area),
    })
}
