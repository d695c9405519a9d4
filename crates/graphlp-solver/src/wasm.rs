//! WASM bindings for graphlp
//!
//! Lets a browser page hand over the form contents and get back everything needed to
//! draw the feasible region and print the optimum.

use wasm_bindgen::prelude::*;

use crate::document::ProblemDocument;
use crate::normalize::normalize;
use crate::problem::RawRow;
use crate::vertex::Solver;

/// Solve a problem document and return the full report as a JS object
#[wasm_bindgen]
pub fn solve_problem(problem: JsValue) -> Result<JsValue, JsValue> {
    let doc: ProblemDocument =
        serde_wasm_bindgen::from_value(problem).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let report = doc.solve(&Solver::new());
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Normalize raw rows only, returning the half-planes (for drawing lines before solving)
#[wasm_bindgen]
pub fn normalize_rows(rows: JsValue, include_non_negativity: bool) -> Result<JsValue, JsValue> {
    let rows: Vec<RawRow> =
        serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let set = normalize(&rows, include_non_negativity);
    serde_wasm_bindgen::to_value(&set.as_slice()).map_err(|e| JsValue::from_str(&e.to_string()))
}
