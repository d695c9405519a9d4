use std::fmt;

use graphlp_solver::document::SolveReport;
use graphlp_solver::{format_coordinate, format_value};

/// Human-readable view of a solve report
pub struct PrettyReport<'a> {
    report: &'a SolveReport,
    show_vertices: bool,
}

impl<'a> PrettyReport<'a> {
    pub fn new(report: &'a SolveReport, show_vertices: bool) -> Self {
        Self { report, show_vertices }
    }
}

impl fmt::Display for PrettyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let sense = if report.sense.is_maximize() { "Maximize" } else { "Minimize" };

        writeln!(f, "{}: {}", sense, report.objective)?;
        writeln!(f)?;
        writeln!(f, "Constraints:")?;
        for plane in report.constraints.iter().filter(|p| p.is_labeled()) {
            writeln!(f, "  {}", plane.label())?;
        }
        writeln!(f)?;

        if report.result.feasible {
            writeln!(f, "Status: OPTIMAL")?;
        } else {
            writeln!(f, "Status: NO SOLUTION")?;
        }
        writeln!(f, "{}", report.summary)?;

        if self.show_vertices && !report.boundary.is_empty() {
            writeln!(f)?;
            writeln!(f, "Vertices:")?;
            for p in &report.boundary {
                let z = report.objective.evaluate(*p);
                let marker = if Some(*p) == report.result.optimum { "  <- optimum" } else { "" };
                writeln!(
                    f,
                    "  {:12} {:>12} {:>12}   z = {}{}",
                    p.label(),
                    format_coordinate(p.x),
                    format_coordinate(p.y),
                    format_value(z),
                    marker
                )?;
            }
        }

        Ok(())
    }
}

/// Human-readable solve output
pub fn render_pretty(report: &SolveReport, show_vertices: bool) -> String {
    PrettyReport::new(report, show_vertices).to_string()
}

/// Machine-readable solve output
pub fn render_json(report: &SolveReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
