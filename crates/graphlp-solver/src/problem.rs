use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::format::format_label_number;

/// Relational operator of a user-entered constraint row
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown constraint operator: {0:?} (expected <=, >= or =)")]
pub struct ParseRelOpError(pub String);

impl FromStr for RelOp {
    type Err = ParseRelOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(RelOp::Le),
            ">=" | "≥" => Ok(RelOp::Ge),
            "=" | "==" => Ok(RelOp::Eq),
            other => Err(ParseRelOpError(other.to_string())),
        }
    }
}

impl TryFrom<String> for RelOp {
    type Error = ParseRelOpError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RelOp> for String {
    fn from(op: RelOp) -> Self {
        op.to_string()
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            RelOp::Le => "≤",
            RelOp::Ge => "≥",
            RelOp::Eq => "=",
        };
        f.write_str(symbol)
    }
}

/// One constraint row as collected from the user: `a·x + b·y op d`.
///
/// The numeric fields are kept as raw text; blank or malformed fields read as zero
/// during normalization.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub a: String,
    pub b: String,
    pub op: RelOp,
    pub d: String,
}

impl RawRow {
    pub fn new(a: impl Into<String>, b: impl Into<String>, op: RelOp, d: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            op,
            d: d.into(),
        }
    }

    /// Build a row from already-numeric coefficients
    pub fn from_values(a: f64, b: f64, op: RelOp, d: f64) -> Self {
        Self::new(a.to_string(), b.to_string(), op, d.to_string())
    }
}

/// The closed half-plane `a·x + b·y ≤ c`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HalfPlane {
    a: f64,
    b: f64,
    c: f64,
    /// Display label; empty for the hidden twin of an equality row
    label: String,
}

impl HalfPlane {
    pub fn new(a: f64, b: f64, c: f64, label: impl Into<String>) -> Self {
        Self {
            a,
            b,
            c,
            label: label.into(),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }

    /// Both direction coefficients vanish, so there is no boundary line
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.a.abs() < eps && self.b.abs() < eps
    }

    /// Whether `p` lies in the half-plane, allowing `eps` of slack on the bound
    pub fn contains(&self, p: Point, eps: f64) -> bool {
        self.a * p.x + self.b * p.y <= self.c + eps
    }

    /// The same coefficients with the inequality flipped: `-a·x - b·y ≤ -c`
    pub fn negated(&self, label: impl Into<String>) -> Self {
        Self::new(-self.a, -self.b, -self.c, label)
    }
}

/// A point in the plane
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Short label drawn next to a corner point, e.g. `(3.0, 1.0)`
    pub fn label(&self) -> String {
        format!("({:.1}, {:.1})", self.x + 0.0, self.y + 0.0)
    }
}

/// Ordered list of half-planes; order only matters for tie-breaks
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    planes: Vec<HalfPlane>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, plane: HalfPlane) {
        self.planes.push(plane);
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HalfPlane> {
        self.planes.iter()
    }

    pub fn as_slice(&self) -> &[HalfPlane] {
        &self.planes
    }

    /// Half-planes a renderer should draw a line for
    pub fn labeled(&self) -> impl Iterator<Item = &HalfPlane> {
        self.planes.iter().filter(|p| p.is_labeled())
    }
}

impl FromIterator<HalfPlane> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = HalfPlane>>(iter: I) -> Self {
        Self {
            planes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a HalfPlane;
    type IntoIter = std::slice::Iter<'a, HalfPlane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}

/// Linear objective `z = a·x + b·y + k`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Objective {
    pub a: f64,
    pub b: f64,
    pub k: f64,
}

impl Objective {
    pub fn new(a: f64, b: f64, k: f64) -> Self {
        Self { a, b, k }
    }

    pub fn evaluate(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.k
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z = {}x + {}y + {}",
            format_label_number(self.a),
            format_label_number(self.b),
            format_label_number(self.k)
        )
    }
}

/// Direction of optimization
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    Maximize,
    #[default]
    Minimize,
}

impl Sense {
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize { Sense::Maximize } else { Sense::Minimize }
    }

    pub fn is_maximize(self) -> bool {
        self == Sense::Maximize
    }

    /// Tag shown next to the optimum marker
    pub fn tag(self) -> &'static str {
        match self {
            Sense::Maximize => "MAX",
            Sense::Minimize => "MIN",
        }
    }
}
