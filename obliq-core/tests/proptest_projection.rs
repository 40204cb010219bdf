//! Property-based tests for projection and area invariants using `proptest`.

use proptest::prelude::*;

use obliq_core::geometry::FaceKind;
use obliq_core::measure::face_report;
use obliq_core::projection::{max_deviation, MATRIX_TOLERANCE};
use obliq_core::{project_matrix, project_oblique, project_orthogonal, Cuboid, ObliqueStyle, ProjectionMode, ShearCoefficients};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_cuboid() -> impl Strategy<Value = Cuboid> {
    (0.1f64..100.0, 0.1f64..100.0, 0.1f64..100.0).prop_map(|(l, w, h)| Cuboid::new(l, w, h))
}

/// Angles in degrees, kept away from ±90° so coefficients stay moderate.
fn arb_angle() -> impl Strategy<Value = f64> {
    -85.0f64..85.0
}

/// Anywhere in the open angle domain, including steep near-vertical shears.
fn arb_any_angle() -> impl Strategy<Value = f64> {
    -89.999f64..89.999
}

fn arb_style() -> impl Strategy<Value = ObliqueStyle> {
    prop_oneof![
        Just(ObliqueStyle::Isometric),
        Just(ObliqueStyle::Dimetric),
        Just(ObliqueStyle::Trimetric),
        Just(ObliqueStyle::Slant),
    ]
}

fn relative_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-7 * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// 1. Matrix projection agrees with direct projection
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn matrix_matches_direct_projection(
        cuboid in arb_cuboid(),
        angle in arb_any_angle(),
        style in arb_style(),
    ) {
        let shear = ShearCoefficients::from_angle(angle, style).unwrap();
        let vertices = cuboid.vertices();

        let direct: Vec<_> = vertices.iter().map(|v| project_oblique(v, &shear)).collect();
        let via_matrix = project_matrix(&vertices, &shear);

        let deviation = max_deviation(&direct, &via_matrix);
        prop_assert!(deviation <= MATRIX_TOLERANCE, "deviation {} exceeds tolerance", deviation);
    }
}

// ---------------------------------------------------------------------------
// 2. Zero angle is orthogonal projection, exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn zero_angle_is_orthogonal(cuboid in arb_cuboid(), style in arb_style()) {
        let shear = ShearCoefficients::from_angle(0.0, style).unwrap();
        for v in cuboid.vertices() {
            prop_assert_eq!(project_oblique(&v, &shear), project_orthogonal(&v));
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Faces parallel to the plane keep their area under any shear
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn parallel_faces_keep_area(
        cuboid in arb_cuboid(),
        angle in arb_angle(),
        style in arb_style(),
    ) {
        let shear = ShearCoefficients::from_angle(angle, style).unwrap();
        let orthogonal = face_report(&cuboid, ProjectionMode::Orthogonal);
        let oblique = face_report(&cuboid, ProjectionMode::Oblique(shear));

        for kind in [FaceKind::Bottom, FaceKind::Top] {
            prop_assert!(
                relative_close(orthogonal.area(kind), oblique.area(kind)),
                "{} area changed: {} vs {}", kind, orthogonal.area(kind), oblique.area(kind)
            );
            prop_assert!(relative_close(orthogonal.area(kind), cuboid.length * cuboid.width));
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Left/right faces are hidden orthogonally and appear under an x shear
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn side_faces_appear_under_shear(
        cuboid in arb_cuboid(),
        angle in prop_oneof![-85.0f64..-1.0, 1.0f64..85.0],
    ) {
        let shear = ShearCoefficients::from_angle(angle, ObliqueStyle::Slant).unwrap();
        let orthogonal = face_report(&cuboid, ProjectionMode::Orthogonal);
        let oblique = face_report(&cuboid, ProjectionMode::Oblique(shear));

        for kind in [FaceKind::Left, FaceKind::Right] {
            prop_assert_eq!(orthogonal.area(kind), 0.0);
            prop_assert!(!orthogonal.get(kind).unwrap().visible);
            prop_assert!(oblique.area(kind) > 0.0);
            let expected = shear.kx().abs() * cuboid.width * cuboid.height;
            prop_assert!(relative_close(oblique.area(kind), expected));
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Face areas stay finite and non-negative
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn areas_are_finite(
        (l, w, h) in (0.0f64..50.0, 0.0f64..50.0, 0.0f64..50.0),
        angle in arb_angle(),
        style in arb_style(),
    ) {
        let shear = ShearCoefficients::from_angle(angle, style).unwrap();
        let report = face_report(&Cuboid::new(l, w, h), ProjectionMode::Oblique(shear));
        for face in report.faces.values() {
            prop_assert!(face.area.is_finite() && face.area >= 0.0);
        }
    }
}
