//! Number formatting for labels and the optimum readout.

/// Shortest round-trip rendering used inside constraint labels (`1.5`, `3`, `-2`)
pub fn format_label_number(v: f64) -> String {
    format!("{}", v + 0.0)
}

/// Two decimals with trailing zeros and a dangling point removed: `3.10` → `3.1`, `2.00` → `2`
pub fn format_coordinate(v: f64) -> String {
    let s = trim_fraction(format!("{:.2}", v));
    if s == "-0" { "0".to_string() } else { s }
}

/// Up to two fraction digits with thousands separators: `12345.678` → `12,345.68`
pub fn format_value(v: f64) -> String {
    let s = format_coordinate(v);
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
