/// Colored text reports for the terminal
use std::fmt::Display;
use std::io::{self, Write};

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use obliq_core::comparison::{Agreement, FaceChange};
use obliq_core::measure::{bottom_edge_lengths, projected_dimensions};
use obliq_core::projection::{max_deviation, MATRIX_TOLERANCE};
use obliq_core::{
    face_report, project_matrix, project_oblique, AggregateReport, Cuboid, FaceRatioReport, ProjectionMode,
    ShearCoefficients,
};

const HEADING: Color = Color::Cyan;
const VISIBLE: Color = Color::Green;
const HIDDEN: Color = Color::DarkGrey;

/// Writes projection and comparison reports to any terminal-like writer
pub struct ReportPrinter {
    rule_width: usize,
}

impl ReportPrinter {
    pub fn new(rule_width: usize) -> Self {
        Self { rule_width }
    }

    fn heading<W: Write>(&self, writer: &mut W, title: &str) -> io::Result<()> {
        let rule = "=".repeat(self.rule_width);
        colored(writer, HEADING, format!("{rule}\n{title}\n{rule}\n"))
    }

    fn section<W: Write>(&self, writer: &mut W, title: &str) -> io::Result<()> {
        colored(writer, HEADING, format!("\n[{title}]\n"))
    }

    /// Coefficients, projected vertices and projected edge lengths of one projection
    pub fn print_projection<W: Write>(
        &self,
        writer: &mut W,
        title: &str,
        cuboid: &Cuboid,
        mode: ProjectionMode,
    ) -> io::Result<()> {
        self.heading(writer, title)?;
        let shear = mode.shear();
        writer.queue(Print(format!(
            "cuboid: L={:.2} W={:.2} H={:.2}\nshear: kx={:.4} ky={:.4}\n",
            cuboid.length,
            cuboid.width,
            cuboid.height,
            shear.kx(),
            shear.ky()
        )))?;

        self.section(writer, "projected vertices")?;
        for (i, (v, p)) in cuboid
            .vertices()
            .iter()
            .zip(mode.project_vertices(&cuboid.vertices()))
            .enumerate()
        {
            writer.queue(Print(format!(
                "V{i}: ({:6.2}, {:6.2}, {:6.2}) -> ({:8.4}, {:8.4})\n",
                v.x, v.y, v.z, p.x, p.y
            )))?;
        }

        self.section(writer, "projected dimensions")?;
        let dims = projected_dimensions(cuboid, mode);
        for (name, value) in [
            ("base length", dims.base_length),
            ("base width", dims.base_width),
            ("top length", dims.top_length),
            ("top width", dims.top_width),
            ("height", dims.height_projection),
        ] {
            writer.queue(Print(format!("{name:>12}: {value:.2}\n")))?;
        }

        self.section(writer, "bottom edges")?;
        let edges = bottom_edge_lengths(cuboid, mode);
        for (name, length) in edges.named() {
            writer.queue(Print(format!("{name}: {length:.2}\n")))?;
        }
        writer.queue(Print(format!("mean: {:.2}\n", edges.mean())))?;

        self.section(writer, "face areas")?;
        let report = face_report(cuboid, mode);
        for (kind, face) in &report.faces {
            let (color, mark) = visibility(face.visible);
            colored(writer, color, format!("{:>6}: {:8.2} {mark}\n", kind.name(), face.area))?;
        }
        writer.queue(Print(format!(
            "visible faces: {}, visible area: {:.2}\n\n",
            report.visible_count(),
            report.total_visible_area()
        )))?;
        writer.flush()
    }

    /// Compare the matrix and direct oblique projections of a cuboid
    pub fn print_matrix_check<W: Write>(
        &self,
        writer: &mut W,
        cuboid: &Cuboid,
        shear: &ShearCoefficients,
    ) -> io::Result<()> {
        self.heading(writer, "matrix projection check")?;
        let vertices = cuboid.vertices();
        let direct: Vec<_> = vertices.iter().map(|v| project_oblique(v, shear)).collect();
        let deviation = max_deviation(&direct, &project_matrix(&vertices, shear));

        writer.queue(Print(format!("max deviation: {deviation:.3e}\n")))?;
        if deviation < MATRIX_TOLERANCE {
            colored(writer, VISIBLE, "matrix and direct projection agree\n\n")?;
        } else {
            colored(writer, Color::Red, "matrix and direct projection differ\n\n")?;
        }
        writer.flush()
    }

    pub fn print_aggregate<W: Write>(&self, writer: &mut W, report: &AggregateReport) -> io::Result<()> {
        self.heading(writer, "orthogonal vs oblique projection")?;
        let cuboid = &report.cuboid;
        writer.queue(Print(format!(
            "cuboid: L={:.2} W={:.2} H={:.2}\nangle: {:.1}° ({})\nshear: kx={:.4} ky={:.4}\n",
            cuboid.length,
            cuboid.width,
            cuboid.height,
            report.angle_degrees,
            report.style.name(),
            report.shear.kx(),
            report.shear.ky()
        )))?;

        self.section(writer, "face areas: orthogonal -> oblique")?;
        for face in &report.faces {
            let (color, _) = visibility(face.oblique_area > obliq_core::VISIBILITY_THRESHOLD);
            colored(
                writer,
                color,
                format!(
                    "{:>6}: {:8.2} -> {:8.2}  {}\n",
                    face.face.name(),
                    face.orthogonal_area,
                    face.oblique_area,
                    describe_change(&face.change)
                ),
            )?;
        }

        self.section(writer, "totals")?;
        writer.queue(Print(format!(
            "orthogonal: {} visible, {:.2}\noblique:    {} visible, {:.2}\n",
            report.orthogonal.visible_face_count,
            report.orthogonal.total_visible_area,
            report.oblique.visible_face_count,
            report.oblique.total_visible_area
        )))?;

        self.section(writer, "ratio")?;
        writer.queue(Print(format!(
            "theoretical 1/cos: {:.4}\nactual total ratio: {:.4}\nerror: {:.4}\n",
            report.theoretical_ratio, report.actual_ratio, report.error
        )))?;
        let (color, verdict) = match report.agreement {
            Agreement::Close => (VISIBLE, "close agreement"),
            Agreement::Rough => (Color::Yellow, "rough agreement"),
            Agreement::Divergent => (Color::Red, "divergent"),
        };
        colored(writer, color, format!("{verdict}\n\n"))?;
        writer.flush()
    }

    pub fn print_face_ratio<W: Write>(&self, writer: &mut W, report: &FaceRatioReport) -> io::Result<()> {
        self.heading(writer, &format!("{} face ratio", report.face))?;
        writer.queue(Print(format!(
            "true area: {:.2}\northogonal: {:.2}\noblique: {:.2}\ntheoretical 1/cos: {:.4}\nactual ratio: {:.4}\nerror: {:.4}\n",
            report.true_area,
            report.orthogonal_area,
            report.oblique_area,
            report.theoretical_ratio,
            report.actual_ratio,
            report.error
        )))?;
        if report.area_preserved() {
            colored(writer, VISIBLE, "area preserved\n\n")?;
        } else {
            colored(writer, Color::Yellow, format!("{}\n\n", describe_change(&report.change)))?;
        }
        writer.flush()
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new(50)
    }
}

fn colored<W: Write>(writer: &mut W, color: Color, text: impl Display) -> io::Result<()> {
    writer.queue(SetForegroundColor(color))?;
    writer.queue(Print(text))?;
    writer.queue(ResetColor)?;
    Ok(())
}

fn visibility(visible: bool) -> (Color, &'static str) {
    if visible {
        (VISIBLE, "visible")
    } else {
        (HIDDEN, "hidden")
    }
}

fn describe_change(change: &FaceChange) -> String {
    match change {
        FaceChange::Unchanged => "unchanged".to_string(),
        FaceChange::Appeared => "hidden -> visible".to_string(),
        FaceChange::Vanished => "visible -> hidden".to_string(),
        FaceChange::Grew { percent } => format!("+{percent:.1}%"),
        FaceChange::Shrank { percent } => format!("-{percent:.1}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obliq_core::{aggregate_report, face_ratio_report, FaceKind, ObliqueStyle};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_aggregate_output() {
        let report = aggregate_report(&Cuboid::cube(4.0), 30.0).unwrap();
        let text = render(|w| ReportPrinter::default().print_aggregate(w, &report));

        assert!(text.contains("angle: 30.0° (slant)"));
        assert!(text.contains("hidden -> visible"));
        assert!(text.contains("theoretical 1/cos: 1.1547"));
        assert!(text.contains("rough agreement"));
    }

    #[test]
    fn test_projection_output() {
        let shear = ShearCoefficients::from_angle(45.0, ObliqueStyle::Isometric).unwrap();
        let text = render(|w| {
            ReportPrinter::default().print_projection(
                w,
                "isometric",
                &Cuboid::new(10.0, 6.0, 4.0),
                ProjectionMode::Oblique(shear),
            )
        });

        assert!(text.contains("kx=0.7071 ky=0.7071"));
        assert!(text.contains("V5: ( 10.00,   0.00,   4.00) -> (  7.1716,  -2.8284)"));
        assert!(text.contains("mean: 8.00"));
    }

    #[test]
    fn test_matrix_check_output() {
        let shear = ShearCoefficients::new(0.3, 0.7).unwrap();
        let text = render(|w| ReportPrinter::default().print_matrix_check(w, &Cuboid::new(10.0, 6.0, 4.0), &shear));
        assert!(text.contains("agree"));
    }

    #[test]
    fn test_face_ratio_output() {
        let report = face_ratio_report(&Cuboid::cube(4.0), 30.0, ObliqueStyle::Slant, FaceKind::Bottom).unwrap();
        let text = render(|w| ReportPrinter::new(10).print_face_ratio(w, &report));
        assert!(text.contains("==========\nbottom face ratio"));
        assert!(text.contains("area preserved"));
    }

    #[test]
    fn test_describe_change() {
        assert_eq!(describe_change(&FaceChange::Grew { percent: 12.345 }), "+12.3%");
        assert_eq!(describe_change(&FaceChange::Vanished), "visible -> hidden");
    }
}
