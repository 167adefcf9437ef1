//! Parsed interval and period records

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;
use crate::parse::interval::{parse_period, period_label};

/// How a token was interpreted
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IntervalKind {
    /// Numeric value with an optional cents unit (`700`, `700c`, `-35.5 cents`)
    Cents,
    /// Frequency ratio (`3/2`) or bare decimal ratio
    Ratio,
}

/// One parsed line of interval input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalToken {
    /// Canonical size in cents (always finite)
    pub cents: f64,

    /// Trimmed input text, kept verbatim for labeling
    pub display_label: String,

    pub kind: IntervalKind,
}

/// The interval after which the circle repeats
#[derive(Clone, Debug, PartialEq)]
pub struct Period {
    pub cents: f64,
    pub display_label: String,
}

impl Period {
    /// True when `cents` can divide the circle: finite, non-zero, and not so
    /// small that degrees per cent overflow.
    pub fn is_usable_cents(cents: f64) -> bool {
        cents.is_finite() && cents != 0.0 && (360.0 / cents).is_finite()
    }

    /// Parse and validate the raw period field.
    ///
    /// Fails when the value is missing, unparseable, zero, non-finite or too
    /// small to place anything; the renderers turn that failure into a blank
    /// canvas.
    pub fn from_text(text: &str) -> Result<Period, DiagramError> {
        let cents = parse_period(text);
        if !Self::is_usable_cents(cents) {
            return Err(DiagramError::InvalidPeriod(text.trim().to_string()));
        }

        Ok(Period {
            cents,
            display_label: period_label(text, cents),
        })
    }
}
