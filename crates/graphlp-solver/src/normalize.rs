use tracing::debug;

use crate::format::format_label_number;
use crate::problem::{ConstraintSet, HalfPlane, RawRow, RelOp};

/// Convert raw constraint rows into canonical `a·x + b·y ≤ c` half-planes.
///
/// Blank or malformed numeric fields read as zero. A row whose three numbers are all zero
/// is skipped. `≥` rows are negated; `=` rows become a labeled half-plane plus an
/// unlabeled opposite twin. With `include_non_negativity`, `x ≥ 0` and `y ≥ 0` come first.
pub fn normalize(rows: &[RawRow], include_non_negativity: bool) -> ConstraintSet {
    let mut set = ConstraintSet::new();

    if include_non_negativity {
        set.push(HalfPlane::new(-1.0, 0.0, 0.0, "x ≥ 0"));
        set.push(HalfPlane::new(0.0, -1.0, 0.0, "y ≥ 0"));
    }

    let mut skipped = 0;
    for row in rows {
        let a = parse_field(&row.a);
        let b = parse_field(&row.b);
        let d = parse_field(&row.d);

        if a == 0.0 && b == 0.0 && d == 0.0 {
            skipped += 1;
            continue;
        }

        let label = format!(
            "{}x + {}y {} {}",
            format_label_number(a),
            format_label_number(b),
            row.op,
            format_label_number(d)
        );

        match row.op {
            RelOp::Le => set.push(HalfPlane::new(a, b, d, label)),
            RelOp::Ge => set.push(HalfPlane::new(-a, -b, -d, label)),
            RelOp::Eq => {
                let plane = HalfPlane::new(a, b, d, label);
                let twin = plane.negated("");
                set.push(plane);
                set.push(twin);
            }
        }
    }

    debug!(
        rows = rows.len(),
        skipped,
        half_planes = set.len(),
        non_negative = include_non_negativity,
        "normalized constraint rows"
    );

    set
}

/// Lenient number parsing for a form field.
///
/// Surrounding whitespace is ignored and the longest numeric prefix is used, so `"12abc"`
/// reads as 12. Anything without a leading number, or a non-finite result, reads as 0.
pub fn parse_field(raw: &str) -> f64 {
    let text = raw.trim();
    let end = numeric_prefix_len(text);
    if end == 0 {
        return 0.0;
    }
    match text[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Byte length of the longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
