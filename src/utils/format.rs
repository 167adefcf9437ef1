//! Number formatting for SVG attributes

/// Format a coordinate with at most two decimals and no trailing zeros.
///
/// Keeps the serialized document compact and stable across platforms
/// (`140.000000001` and `140` both become `"140"`).
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
