//! Interval token recognition
//!
//! A token is either a cents value (number with an optional unit marker) or a
//! frequency ratio (`a/b` or a bare decimal). The cents grammar is tried first
//! and the ratio grammar is the fallback, so each token is resolved in a
//! single pass with no intermediate tree.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{IntervalKind, IntervalToken};

/// Number with optional sign and fraction, then an optional cents unit
static CENTS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*(?:cents?|c|¢)?$")
        .expect("cents pattern is a valid regex")
});

/// Recognised value before it is attached to a label
#[derive(Debug, Clone, Copy, PartialEq)]
enum ParsedValue<'a> {
    /// Cents value together with the numeric text (unit stripped)
    Cents { cents: f64, numeric: &'a str },
    /// Ratio converted to cents; `fraction` is true for the `a/b` form
    Ratio { cents: f64, fraction: bool },
}

impl ParsedValue<'_> {
    fn cents(&self) -> f64 {
        match *self {
            ParsedValue::Cents { cents, .. } | ParsedValue::Ratio { cents, .. } => cents,
        }
    }

    fn kind(&self) -> IntervalKind {
        match self {
            ParsedValue::Cents { .. } => IntervalKind::Cents,
            ParsedValue::Ratio { .. } => IntervalKind::Ratio,
        }
    }
}

/// Convert a frequency ratio to cents (`1200 * log2(r)`)
pub fn ratio_to_cents(ratio: f64) -> f64 {
    1200.0 * ratio.log2()
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_ratio(token: &str) -> Option<ParsedValue<'_>> {
    let (ratio, fraction) = match token.split_once('/') {
        Some((num, den)) => {
            if den.contains('/') {
                return None;
            }
            let num = parse_finite(num)?;
            let den = parse_finite(den)?;
            if den == 0.0 {
                return None;
            }
            (num / den, true)
        }
        None => {
            let value = parse_finite(token)?;
            if value <= 0.0 {
                return None;
            }
            (value, false)
        }
    };

    let cents = ratio_to_cents(ratio);
    cents.is_finite().then_some(ParsedValue::Ratio { cents, fraction })
}

/// Recognise a trimmed, non-empty token
fn parse_value(token: &str) -> Option<ParsedValue<'_>> {
    if let Some(caps) = CENTS_PATTERN.captures(token) {
        let numeric = caps.get(1)?.as_str();
        let cents = parse_finite(numeric)?;
        return Some(ParsedValue::Cents { cents, numeric });
    }

    parse_ratio(token)
}

/// Parse one line of interval input.
///
/// Returns `None` for blank lines, `#` comments and anything that is neither
/// a cents value nor a ratio. A plain decimal such as `1.5` is read as cents;
/// only shapes outside the cents grammar (`1.5e0`) reach the decimal-ratio path.
pub fn parse_token(text: &str) -> Option<IntervalToken> {
    let token = text.trim();
    if token.is_empty() || token.starts_with('#') {
        return None;
    }

    let value = parse_value(token)?;
    Some(IntervalToken {
        cents: value.cents(),
        display_label: token.to_string(),
        kind: value.kind(),
    })
}

/// Parse the multi-line interval field, keeping input order
pub fn parse_intervals(text: &str) -> Vec<IntervalToken> {
    text.lines()
        .filter_map(|line| {
            let token = parse_token(line);
            if token.is_none() && !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                log::trace!("Skipping unparseable interval line {:?}", line);
            }
            token
        })
        .collect()
}

/// Parse the period field to cents.
///
/// Empty or unparseable input yields `NaN`; callers must also reject zero
/// and non-finite values before laying anything out.
pub fn parse_period(text: &str) -> f64 {
    let token = text.trim();
    if token.is_empty() {
        return f64::NAN;
    }

    parse_value(token).map_or(f64::NAN, |value| value.cents())
}

/// Label drawn next to the period point.
///
/// `a/b` ratios stay verbatim, cents lose their unit suffix, and any other
/// present input falls back to `cents` rounded to a whole number.
pub fn period_label(text: &str, cents: f64) -> String {
    let token = text.trim();
    match parse_value(token) {
        Some(ParsedValue::Cents { numeric, .. }) => numeric.to_string(),
        Some(ParsedValue::Ratio { fraction: true, .. }) => token.to_string(),
        _ => {
            let rounded = cents.round();
            if rounded == 0.0 {
                "0".to_string()
            } else {
                format!("{}", rounded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_cents_with_units() {
        for (text, expected) in [
            ("700", 700.0),
            ("700c", 700.0),
            ("700 cents", 700.0),
            ("1 cent", 1.0),
            ("-35.5C", -35.5),
            ("+12", 12.0),
            (".5", 0.5),
            ("386.3¢", 386.3),
        ] {
            let token = parse_token(text).unwrap();
            assert_eq!(token.kind, IntervalKind::Cents, "{}", text);
            assert_close(token.cents, expected);
            assert_eq!(token.display_label, text);
        }
    }

    #[test]
    fn test_ratio_forms() {
        let fifth = parse_token("3/2").unwrap();
        assert_eq!(fifth.kind, IntervalKind::Ratio);
        assert_close(fifth.cents, 1200.0 * 1.5f64.log2());

        let spaced = parse_token(" 5 / 4 ").unwrap();
        assert_eq!(spaced.display_label, "5 / 4");
        assert_close(spaced.cents, 1200.0 * 1.25f64.log2());

        // The cents grammar wins for plain decimals; exponent notation falls through
        let decimal = parse_token("1.5e0").unwrap();
        assert_eq!(decimal.kind, IntervalKind::Ratio);
        assert_close(decimal.cents, 1200.0 * 1.5f64.log2());

        let plain = parse_token("1.5").unwrap();
        assert_eq!(plain.kind, IntervalKind::Cents);
        assert_eq!(plain.cents, 1.5);
    }

    #[test]
    fn test_rejected_tokens() {
        for text in ["", "   ", "# comment", "#700", "abc", "3/0", "0/5", "-3/2", "1/2/3", "inf", "NaN", "700 hz"] {
            assert_eq!(parse_token(text), None, "{:?} should not parse", text);
        }
    }

    #[test]
    fn test_parse_intervals_keeps_order_and_duplicates() {
        let tokens = parse_intervals("#ignore this\n\n400\r\n3/2\nbogus\n400");
        let labels: Vec<&str> = tokens.iter().map(|t| t.display_label.as_str()).collect();
        assert_eq!(labels, vec!["400", "3/2", "400"]);
    }

    #[test]
    fn test_parse_period() {
        assert_close(parse_period("2/1"), 1200.0);
        assert_close(parse_period("1200c"), 1200.0);
        assert!(parse_period("").is_nan());
        assert!(parse_period("  ").is_nan());
        assert!(parse_period("octave").is_nan());
    }

    #[test]
    fn test_period_label_normalization() {
        assert_eq!(period_label("2/1", 1200.0), "2/1");
        assert_eq!(period_label("1200c", 1200.0), "1200");
        assert_eq!(period_label(" 1200 cents ", 1200.0), "1200");
        assert_eq!(period_label("2e0", parse_period("2e0")), "1200");
        assert_eq!(period_label("3e0", parse_period("3e0")), "1902");
    }

    #[test]
    fn test_period_label_reparses_to_same_value() {
        for text in ["1200c", "700.5 cents", "-1200", "1200"] {
            let cents = parse_period(text);
            let label = period_label(text, cents);
            assert_close(parse_period(&label), cents);
        }
    }
}
