/// Experiment parameters, passed explicitly to each report
use serde::{Deserialize, Serialize};

use crate::comparison::{aggregate_report_with_style, AggregateReport, DEFAULT_STYLE};
use crate::error::ProjectionResult;
use crate::geometry::Cuboid;
use crate::transform::{checked_angle, ObliqueStyle, ShearCoefficients};

/// One projection experiment: a solid, an angle and a shear style.
///
/// Missing fields take the defaults of the classroom setup: a cube of
/// edge 4 viewed at 30° with the single-axis slant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub cuboid: Cuboid,
    pub angle_degrees: f64,
    pub style: ObliqueStyle,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            cuboid: Cuboid::default(),
            angle_degrees: 30.0,
            style: DEFAULT_STYLE,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> ProjectionResult<()> {
        self.cuboid.validate()?;
        checked_angle(self.angle_degrees)?;
        Ok(())
    }

    pub fn shear(&self) -> ProjectionResult<ShearCoefficients> {
        ShearCoefficients::from_angle(self.angle_degrees, self.style)
    }

    /// Validate and build the aggregate comparison report.
    pub fn run(&self) -> ProjectionResult<AggregateReport> {
        self.validate()?;
        aggregate_report_with_style(&self.cuboid, self.angle_degrees, self.style)
    }
}
