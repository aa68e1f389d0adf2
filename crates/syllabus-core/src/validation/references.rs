//! Year filtering for the reference list
//!
//! Filter expressions, checked in this order (first match wins):
//! - `N+`   contains `+`: year >= N
//! - `N-M`  contains `-`: N <= year <= M
//! - `>=N`  year >= N
//! - `<=N`  year <= N
//! - `N`    year == N
//!
//! References without a 19xx/20xx year token are always kept.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Result, SyllabusError};

static YEAR_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn year_regex() -> Option<&'static Regex> {
    YEAR_RE
        .get_or_init(
            || match Regex::new(r"(?-u:\b)(?:19|20)[0-9]{2}(?-u:\b)") {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(error = %e, "Failed to compile year regex");
                    None
                }
            },
        )
        .as_ref()
}

/// First four-digit year between 1900 and 2099 in a reference
pub fn extract_year(reference: &str) -> Option<i64> {
    year_regex()?.find(reference)?.as_str().parse().ok()
}

/// A parsed year-filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    AtLeast(i64),
    Range { min: i64, max: i64 },
    AtMost(i64),
    Exact(i64),
}

impl YearFilter {
    /// Parse a filter expression; blank input means "no filter"
    pub fn parse(expr: &str) -> Result<Option<Self>> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Ok(None);
        }

        let bound = |body: &str| {
            leading_int(body).ok_or_else(|| {
                SyllabusError::invalid_filter(expr, format!("'{}' is not a year", body.trim()))
            })
        };

        let filter = if expr.contains('+') {
            YearFilter::AtLeast(bound(expr.replacen('+', "", 1).as_str())?)
        } else if let Some((min, max)) = expr.split_once('-') {
            YearFilter::Range {
                min: bound(min)?,
                max: bound(max)?,
            }
        } else if let Some(rest) = expr.strip_prefix(">=") {
            YearFilter::AtLeast(bound(rest)?)
        } else if let Some(rest) = expr.strip_prefix("<=") {
            YearFilter::AtMost(bound(rest)?)
        } else {
            YearFilter::Exact(bound(expr)?)
        };

        Ok(Some(filter))
    }

    pub fn matches(&self, year: i64) -> bool {
        match *self {
            YearFilter::AtLeast(min) => year >= min,
            YearFilter::Range { min, max } => min <= year && year <= max,
            YearFilter::AtMost(max) => year <= max,
            YearFilter::Exact(target) => year == target,
        }
    }

    /// Whether a reference survives this filter
    pub fn keeps(&self, reference: &str) -> bool {
        match extract_year(reference) {
            Some(year) => self.matches(year),
            None => true,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::AtLeast(min) => write!(f, "year >= {min}"),
            YearFilter::Range { min, max } => write!(f, "{min} <= year <= {max}"),
            YearFilter::AtMost(max) => write!(f, "year <= {max}"),
            YearFilter::Exact(target) => write!(f, "year == {target}"),
        }
    }
}

/// Lenient integer read: optional whitespace and sign, then leading digits.
/// Anything after the digits is ignored.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Keep the references whose year satisfies `filter_expr`, preserving order.
///
/// A blank expression returns the input unchanged. An unparseable expression
/// also returns the input unchanged (logged at warn); use [`YearFilter::parse`]
/// to surface the error instead.
pub fn filter_references_by_year<S: AsRef<str>>(
    references: &[S],
    filter_expr: &str,
) -> Vec<String> {
    let all = || -> Vec<String> { references.iter().map(|r| r.as_ref().to_string()).collect() };

    match YearFilter::parse(filter_expr) {
        Ok(None) => all(),
        Ok(Some(filter)) => {
            let kept: Vec<String> = references
                .iter()
                .map(AsRef::as_ref)
                .filter(|reference| filter.keeps(reference))
                .map(str::to_string)
                .collect();
            debug!(
                filter = %filter,
                kept = kept.len(),
                total = references.len(),
                "filter_references"
            );
            kept
        }
        Err(e) => {
            warn!(error = %e, "ignoring year filter");
            all()
        }
    }
}
