//! Numeric tolerances used by the vertex solver.

/// Slack allowed on `a·x + b·y ≤ c` when testing a candidate point
pub const FEASIBILITY_EPSILON: f64 = 1e-8;

/// Below this `|det|` two boundary lines are treated as parallel
pub const DETERMINANT_EPSILON: f64 = 1e-8;

/// Below this a coefficient is zero and the line has no intercept on that axis
pub const AXIS_EPSILON: f64 = 1e-8;

/// Two candidates closer than this on both axes are the same vertex
pub const DEDUP_TOLERANCE: f64 = 1e-5;

/// Decimal places of the grid used as a second equality key when merging candidates
pub const SNAP_DECIMALS: i32 = 4;

/// Tunable set of tolerances, defaulting to the constants above
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub feasibility: f64,
    pub determinant: f64,
    pub axis: f64,
    pub dedup: f64,
    pub snap_decimals: i32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            feasibility: FEASIBILITY_EPSILON,
            determinant: DETERMINANT_EPSILON,
            axis: AXIS_EPSILON,
            dedup: DEDUP_TOLERANCE,
            snap_decimals: SNAP_DECIMALS,
        }
    }
}

impl Tolerances {
    /// Round a coordinate to `snap_decimals` places; negative zero becomes zero
    pub fn snap(&self, x: f64) -> f64 {
        let scale = 10f64.powi(self.snap_decimals);
        (x * scale).round() / scale + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_four_places() {
        let tol = Tolerances::default();
        assert_eq!(tol.snap(1.00001), 1.0);
        assert_eq!(tol.snap(1.99999), 2.0);
        assert_eq!(tol.snap(3.14159), 3.1416);
    }

    #[test]
    fn test_snap_clears_negative_zero() {
        let tol = Tolerances::default();
        let snapped = tol.snap(-0.00001);
        assert_eq!(snapped, 0.0);
        assert!(snapped.is_sign_positive());
    }
}
