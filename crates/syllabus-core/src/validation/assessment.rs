//! Assessment breakdown percentage check
//!
//! Advisory only: malformed items count as 0% and the check never fails.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

/// Matches `<digits>[.<digits>]%`; ASCII digits only
static PERCENT_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn percent_regex() -> Option<&'static Regex> {
    PERCENT_RE
        .get_or_init(|| match Regex::new(r"([0-9]+(?:\.[0-9]+)?)%") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile percentage regex");
                None
            }
        })
        .as_ref()
}

/// Result of summing the percentages of an assessment breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentValidation {
    /// Sum of all percentages, rounded to 2 decimals
    pub total: f64,
    /// True when the unrounded sum is within 0.01 of 100
    pub is_valid: bool,
    /// `100 - total`, rounded to 2 decimals; negative when over-allocated
    pub remaining: f64,
}

/// First `N%` or `N.N%` value in an item, if any
pub fn extract_percentage(item: &str) -> Option<f64> {
    let captures = percent_regex()?.captures(item)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Sum the trailing percentages of assessment items
pub fn validate_assessment_total<S: AsRef<str>>(items: &[S]) -> AssessmentValidation {
    let total: f64 = items
        .iter()
        .filter_map(|item| extract_percentage(item.as_ref()))
        .sum();

    AssessmentValidation {
        total: round_to_cents(total),
        is_valid: (total - 100.0).abs() < 0.01,
        remaining: round_to_cents(100.0 - total),
    }
}

/// Round to 2 decimals with halves rounded toward positive infinity
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
