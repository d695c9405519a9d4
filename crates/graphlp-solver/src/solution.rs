use crate::format::{format_coordinate, format_value};
use crate::problem::{Point, Sense};

/// The result of a vertex-enumeration solve
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Distinct feasible vertices in generation order
    pub vertices: Vec<Point>,
    /// The optimizing vertex, if any vertex was found
    pub optimum: Option<Point>,
    /// Objective value at `optimum`
    pub objective_value: Option<f64>,
    /// False when no feasible vertex exists (empty or unbounded region)
    pub feasible: bool,
}

impl SolveResult {
    pub fn optimal(vertices: Vec<Point>, optimum: Point, objective_value: f64) -> Self {
        Self {
            vertices,
            optimum: Some(optimum),
            objective_value: Some(objective_value),
            feasible: true,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            vertices: Vec::new(),
            optimum: None,
            objective_value: None,
            feasible: false,
        }
    }

    /// Vertices ordered by angle around their centroid, ready to be filled as a polygon.
    /// Fewer than three vertices are returned as they are.
    pub fn boundary(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if points.len() < 3 {
            return points;
        }

        let n = points.len() as f64;
        let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
        let cy = points.iter().map(|p| p.y).sum::<f64>() / n;

        points.sort_by(|a, b| {
            let angle_a = (a.y - cy).atan2(a.x - cx);
            let angle_b = (b.y - cy).atan2(b.x - cx);
            angle_a.total_cmp(&angle_b)
        });
        points
    }

    /// One-line readout of the optimum
    pub fn summary(&self) -> String {
        match (self.optimum, self.objective_value) {
            (Some(p), Some(z)) if self.feasible => format!(
                "Optimal: x = {}, y = {}, Z = {}",
                format_coordinate(p.x),
                format_coordinate(p.y),
                format_value(z)
            ),
            _ => "No feasible region found (empty or unbounded).".to_string(),
        }
    }

    /// Label placed next to the optimum marker, e.g. `MAX = 11`
    pub fn optimum_tag(&self, sense: Sense) -> Option<String> {
        self.objective_value
            .map(|z| format!("{} = {}", sense.tag(), format_value(z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_orders_counter_clockwise() {
        let result = SolveResult::optimal(
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 4.0),
                Point::new(3.0, 0.0),
                Point::new(3.0, 1.0),
            ],
            Point::new(3.0, 1.0),
            11.0,
        );
        let boundary = result.boundary();

        assert_eq!(
            boundary,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(3.0, 1.0),
                Point::new(0.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_boundary_short_lists_unchanged() {
        let result = SolveResult::optimal(
            vec![Point::new(2.0, 5.0), Point::new(2.0, 0.0)],
            Point::new(2.0, 5.0),
            5.0,
        );
        assert_eq!(result.boundary(), result.vertices);
    }

    #[test]
    fn test_summary() {
        let result = SolveResult::optimal(vec![Point::new(3.0, 1.0)], Point::new(3.0, 1.0), 11.0);
        assert_eq!(result.summary(), "Optimal: x = 3, y = 1, Z = 11");
        assert_eq!(result.optimum_tag(Sense::Maximize).as_deref(), Some("MAX = 11"));

        let none = SolveResult::infeasible();
        assert_eq!(none.summary(), "No feasible region found (empty or unbounded).");
        assert_eq!(none.optimum_tag(Sense::Minimize), None);
    }
}
