mod format;
mod normalize;
mod problem;
mod solution;
mod tolerance;
mod vertex;

#[cfg(feature = "serde")]
pub mod document;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use format::{format_coordinate, format_value};
pub use normalize::{normalize, parse_field};
pub use problem::{ConstraintSet, HalfPlane, Objective, ParseRelOpError, Point, RawRow, RelOp, Sense};
pub use solution::SolveResult;
pub use tolerance::{
    Tolerances, AXIS_EPSILON, DEDUP_TOLERANCE, DETERMINANT_EPSILON, FEASIBILITY_EPSILON, SNAP_DECIMALS,
};
pub use vertex::{solve, Solver};
