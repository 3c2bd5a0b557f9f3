//! Display formatting for raw counts.
//!
//! Absent counts render as the `"0"` placeholder. That is a display
//! convention, not a claim that the true count is zero.

/// Format an optional count with thousands separators.
///
/// `None` (and non-finite input) produces the `"0"` placeholder. Fractional
/// input rounds to the nearest integer before grouping.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = v.round() as i64;
            if rounded < 0 {
                format!("-{}", group_thousands(rounded.unsigned_abs()))
            } else {
                group_thousands(rounded.unsigned_abs())
            }
        }
        _ => "0".to_string(),
    }
}

/// Integer convenience wrapper over [`format_stat`].
pub fn format_count(value: Option<u64>) -> String {
    format_stat(value.map(|v| v as f64))
}

/// Compact rendering for the summary card totals: `1.2m`, `48.3k`, `2.1b`.
///
/// Counts below one thousand print as-is; `None` is the same `"0"`
/// placeholder the long form uses.
pub fn format_compact(value: Option<u64>) -> String {
    match value {
        None => "0".to_string(),
        Some(v) if v >= 1_000_000_000 => format!("{:.1}b", v as f64 / 1_000_000_000.0),
        Some(v) if v >= 1_000_000 => format!("{:.1}m", v as f64 / 1_000_000.0),
        Some(v) if v >= 1_000 => format!("{:.1}k", v as f64 / 1_000.0),
        Some(v) => v.to_string(),
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<_> = s.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
