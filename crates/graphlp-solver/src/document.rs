//! Serializable problem description and solve report, shared by the CLI and the WASM bindings.

use serde::{Deserialize, Serialize};

use crate::format::format_label_number;
use crate::normalize::{normalize, parse_field};
use crate::problem::{ConstraintSet, HalfPlane, Objective, Point, RawRow, RelOp, Sense};
use crate::solution::SolveResult;
use crate::vertex::Solver;

/// A numeric form field: a JSON number, a string, or absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    fn to_text(field: &Option<Field>) -> String {
        match field {
            Some(Field::Number(v)) => format_label_number(*v),
            Some(Field::Text(s)) => s.clone(),
            None => String::new(),
        }
    }

    fn to_number(field: &Option<Field>) -> f64 {
        parse_field(&Self::to_text(field))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveDocument {
    #[serde(default)]
    pub a: Option<Field>,
    #[serde(default)]
    pub b: Option<Field>,
    #[serde(default)]
    pub k: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDocument {
    #[serde(default)]
    pub a: Option<Field>,
    #[serde(default)]
    pub b: Option<Field>,
    #[serde(default = "default_op")]
    pub op: RelOp,
    #[serde(default)]
    pub d: Option<Field>,
}

/// A full two-variable problem as entered by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDocument {
    #[serde(default)]
    pub objective: ObjectiveDocument,
    #[serde(default)]
    pub sense: Sense,
    #[serde(default = "default_true")]
    pub non_negative: bool,
    #[serde(default)]
    pub constraints: Vec<RowDocument>,
}

fn default_op() -> RelOp {
    RelOp::Le
}

fn default_true() -> bool {
    true
}

impl ProblemDocument {
    pub fn rows(&self) -> Vec<RawRow> {
        self.constraints
            .iter()
            .map(|r| RawRow::new(Field::to_text(&r.a), Field::to_text(&r.b), r.op, Field::to_text(&r.d)))
            .collect()
    }

    pub fn objective(&self) -> Objective {
        Objective::new(
            Field::to_number(&self.objective.a),
            Field::to_number(&self.objective.b),
            Field::to_number(&self.objective.k),
        )
    }

    pub fn constraint_set(&self) -> ConstraintSet {
        normalize(&self.rows(), self.non_negative)
    }

    /// Normalize, solve and package everything a reporter or renderer needs
    pub fn solve(&self, solver: &Solver) -> SolveReport {
        let constraints = self.constraint_set();
        let objective = self.objective();
        let result = solver.solve(&constraints, &objective, self.sense.is_maximize());
        SolveReport::new(constraints, objective, self.sense, result)
    }
}

/// Solve output with the derived views used for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub objective: Objective,
    pub sense: Sense,
    pub constraints: Vec<HalfPlane>,
    pub result: SolveResult,
    pub boundary: Vec<Point>,
    pub summary: String,
    pub optimum_tag: Option<String>,
}

impl SolveReport {
    pub fn new(constraints: ConstraintSet, objective: Objective, sense: Sense, result: SolveResult) -> Self {
        Self {
            objective,
            sense,
            boundary: result.boundary(),
            summary: result.summary(),
            optimum_tag: result.optimum_tag(sense),
            constraints: constraints.as_slice().to_vec(),
            result,
        }
    }
}
