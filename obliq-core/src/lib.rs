/// obliq Core Library - Parallel projection of rectangular solids
///
/// This library provides the stateless core for oblique and orthogonal
/// projection teaching demos: cuboid geometry, shear coefficients and
/// matrices, projection, shoelace area measurement and comparison reports.
pub mod comparison;
pub mod config;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use comparison::{aggregate_report, aggregate_report_with_style, face_ratio_report, AggregateReport, FaceRatioReport};
pub use config::ExperimentConfig;
pub use error::{ProjectionError, ProjectionResult};
pub use geometry::{Cuboid, Face, FaceKind};
pub use measure::{face_report, face_report_for, polygon_area, FaceArea, FaceReport, VISIBILITY_THRESHOLD};
pub use projection::{project_matrix, project_oblique, project_orthogonal, ProjectionMode};
pub use transform::{ObliqueStyle, ShearCoefficients, Transform};
