/// Terminal front end printing projection comparison reports
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use obliq_core::{
    face_ratio_report, Cuboid, ExperimentConfig, FaceKind, ObliqueStyle, ProjectionError, ProjectionMode,
    ShearCoefficients,
};
use thiserror::Error;
use tracing::info;

pub mod report;

pub use report::ReportPrinter;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Read an experiment from a JSON file.
pub fn load_config(path: &Path) -> Result<ExperimentConfig, TerminalError> {
    let text = fs::read_to_string(path)?;
    let config: ExperimentConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Runs fixed demonstration scenarios or a single configured experiment
pub struct ReportApp {
    printer: ReportPrinter,
}

impl ReportApp {
    pub fn new(printer: ReportPrinter) -> Self {
        Self { printer }
    }

    /// Print the full comparison for one experiment.
    pub fn run_experiment<W: Write>(&self, writer: &mut W, config: &ExperimentConfig) -> Result<(), TerminalError> {
        let report = config.run()?;
        self.printer.print_aggregate(writer, &report)?;
        for face in [FaceKind::Bottom, FaceKind::Top] {
            let ratio = face_ratio_report(&config.cuboid, config.angle_degrees, config.style, face)?;
            self.printer.print_face_ratio(writer, &ratio)?;
        }
        Ok(())
    }

    /// The classroom walk-through: three shear styles on a 10×6×4 cuboid,
    /// the matrix cross-check, then the cube comparison at 30°.
    pub fn run_demo<W: Write>(&self, writer: &mut W) -> Result<(), TerminalError> {
        let cuboid = Cuboid::new(10.0, 6.0, 4.0);

        let scenarios = [
            ("isometric oblique projection (45°)", ShearCoefficients::from_angle(45.0, ObliqueStyle::Isometric)?),
            ("dimetric oblique projection (26.56°)", ShearCoefficients::from_angle(26.56, ObliqueStyle::Dimetric)?),
            ("custom oblique projection", ShearCoefficients::new(0.3, 0.7)?),
        ];
        for (title, shear) in &scenarios {
            info!(scenario = *title, kx = shear.kx(), ky = shear.ky(), "printing projection");
            self.printer
                .print_projection(writer, title, &cuboid, ProjectionMode::Oblique(*shear))?;
        }

        let (_, last) = &scenarios[scenarios.len() - 1];
        self.printer.print_matrix_check(writer, &cuboid, last)?;

        self.run_experiment(writer, &ExperimentConfig::default())
    }
}

impl Default for ReportApp {
    fn default() -> Self {
        Self::new(ReportPrinter::default())
    }
}
