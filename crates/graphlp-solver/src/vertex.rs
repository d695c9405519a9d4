use tracing::{debug, trace};

use crate::problem::{ConstraintSet, HalfPlane, Objective, Point};
use crate::solution::SolveResult;
use crate::tolerance::Tolerances;

/// Vertex-enumeration solver for two-variable linear programs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    tolerances: Tolerances,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn with_feasibility_epsilon(mut self, eps: f64) -> Self {
        self.tolerances.feasibility = eps;
        self
    }

    pub fn with_determinant_epsilon(mut self, eps: f64) -> Self {
        self.tolerances.determinant = eps;
        self
    }

    pub fn with_axis_epsilon(mut self, eps: f64) -> Self {
        self.tolerances.axis = eps;
        self
    }

    pub fn with_dedup_tolerance(mut self, tol: f64) -> Self {
        self.tolerances.dedup = tol;
        self
    }

    pub fn with_snap_decimals(mut self, decimals: i32) -> Self {
        self.tolerances.snap_decimals = decimals;
        self
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Find the feasible vertices of `constraints` and the one optimizing `objective`.
    ///
    /// An empty vertex set (empty region, or an unbounded one with no corner found)
    /// reports `feasible = false`. Ties go to the vertex generated first.
    pub fn solve(&self, constraints: &ConstraintSet, objective: &Objective, maximize: bool) -> SolveResult {
        let candidates = self.candidates(constraints);
        let vertices = self.dedup(&candidates);

        debug!(
            half_planes = constraints.len(),
            candidates = candidates.len(),
            vertices = vertices.len(),
            "enumerated feasible vertices"
        );

        let mut best: Option<(Point, f64)> = None;
        for &vertex in &vertices {
            let z = objective.evaluate(vertex);
            let better = match best {
                None => true,
                Some((_, best_z)) if maximize => z > best_z,
                Some((_, best_z)) => z < best_z,
            };
            if better {
                best = Some((vertex, z));
            }
        }

        match best {
            Some((optimum, value)) => {
                debug!(x = optimum.x, y = optimum.y, value, maximize, "optimum found");
                SolveResult::optimal(vertices, optimum, value)
            }
            None => {
                debug!("no feasible vertex found");
                SolveResult::infeasible()
            }
        }
    }

    /// Whether `p` satisfies every half-plane within the feasibility epsilon
    pub fn is_feasible(&self, p: Point, constraints: &ConstraintSet) -> bool {
        constraints
            .iter()
            .all(|c| c.contains(p, self.tolerances.feasibility))
    }

    /// Intersection of the boundary lines of `ci` and `cj`, or `None` when parallel
    pub fn intersect(&self, ci: &HalfPlane, cj: &HalfPlane) -> Option<Point> {
        let det = ci.a() * cj.b() - cj.a() * ci.b();
        if det.abs() < self.tolerances.determinant {
            return None;
        }
        let x = (ci.c() * cj.b() - cj.c() * ci.b()) / det;
        let y = (cj.c() * ci.a() - ci.c() * cj.a()) / det;
        Some(Point::new(x, y))
    }

    /// Feasible candidates in generation order: pairwise intersections first, then
    /// axis intercepts, each in ascending constraint index order
    fn candidates(&self, constraints: &ConstraintSet) -> Vec<Point> {
        let planes = constraints.as_slice();
        let mut points = Vec::new();

        for (i, ci) in planes.iter().enumerate() {
            for cj in &planes[i + 1..] {
                if let Some(p) = self.intersect(ci, cj) {
                    if self.is_feasible(p, constraints) {
                        trace!(x = p.x, y = p.y, "intersection candidate");
                        points.push(p);
                    }
                }
            }
        }

        for c in planes {
            if c.a().abs() > self.tolerances.axis {
                let p = Point::new(c.c() / c.a(), 0.0);
                if self.is_feasible(p, constraints) {
                    trace!(x = p.x, "x-intercept candidate");
                    points.push(p);
                }
            }
            if c.b().abs() > self.tolerances.axis {
                let p = Point::new(0.0, c.c() / c.b());
                if self.is_feasible(p, constraints) {
                    trace!(y = p.y, "y-intercept candidate");
                    points.push(p);
                }
            }
        }

        points
    }

    /// Keep the first of each group of near-equal candidates, unrounded.
    ///
    /// Two points are the same vertex when they are within the dedup tolerance on both
    /// axes, or when they round to the same point on the snap grid.
    fn dedup(&self, candidates: &[Point]) -> Vec<Point> {
        let tol = &self.tolerances;
        let mut unique: Vec<(Point, Point)> = Vec::new();

        for &p in candidates {
            let key = Point::new(tol.snap(p.x), tol.snap(p.y));
            let seen = unique.iter().any(|(q, q_key)| {
                let close = (q.x - p.x).abs() < tol.dedup && (q.y - p.y).abs() < tol.dedup;
                close || *q_key == key
            });
            if !seen {
                unique.push((p, key));
            }
        }

        unique.into_iter().map(|(p, _)| p).collect()
    }
}

/// Solve with the default tolerances
pub fn solve(constraints: &ConstraintSet, objective: &Objective, maximize: bool) -> SolveResult {
    Solver::new().solve(constraints, objective, maximize)
}
