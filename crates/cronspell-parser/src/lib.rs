//! cronspell-parser: cron expression decomposition.
//!
//! Splits a 5, 6, or 7 field cron expression into typed field descriptors,
//! renders a human-readable summary, and previews approximate upcoming runs.
//!
//! Field counts select the schema:
//! - 5 fields: minute, hour, day of month, month, day of week
//! - 6 fields: second first
//! - 7 fields: second first, year last
//!
//! Malformed sub-expressions (unknown abbreviations, out-of-range numbers,
//! inverted ranges) are not errors: they degrade into pass-through values.
//! Only a wrong field count aborts parsing.

pub mod field;
pub mod names;
pub mod preview;
pub mod summary;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use field::{FieldKind, ParsedField, ordinal_suffix, parse_field};

use names::{DAY_ABBREVIATIONS, DAY_NAMES, MONTH_ABBREVIATIONS, MONTH_NAMES, NO_NAMES};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("cron expression must have 5, 6, or 7 fields, got {0}")]
    FieldCount(usize),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// A fully parsed cron expression.
///
/// `seconds` and `year` are present only for 6- and 7-field input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCron {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<ParsedField>,
    pub minutes: ParsedField,
    pub hours: ParsedField,
    pub day_of_month: ParsedField,
    pub month: ParsedField,
    pub day_of_week: ParsedField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<ParsedField>,
}

/// Parse a cron expression into its field breakdown.
///
/// Surrounding and repeated whitespace is ignored. Fails only when the
/// field count is not 5, 6, or 7.
pub fn parse(expression: &str) -> Result<ParsedCron> {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    debug!(count = fields.len(), "parsing cron expression");

    match fields.as_slice() {
        [m, h, dom, mon, dow] => Ok(ParsedCron {
            seconds: None,
            minutes: parse_field(m, 0, 59, &NO_NAMES, &NO_NAMES),
            hours: parse_field(h, 0, 23, &NO_NAMES, &NO_NAMES),
            day_of_month: parse_field(dom, 1, 31, &NO_NAMES, &NO_NAMES),
            month: parse_field(mon, 1, 12, &MONTH_NAMES, &MONTH_ABBREVIATIONS),
            day_of_week: parse_field(dow, 0, 6, &DAY_NAMES, &DAY_ABBREVIATIONS),
            year: None,
        }),
        [s, m, h, dom, mon, dow] => Ok(ParsedCron {
            seconds: Some(parse_field(s, 0, 59, &NO_NAMES, &NO_NAMES)),
            minutes: parse_field(m, 0, 59, &NO_NAMES, &NO_NAMES),
            hours: parse_field(h, 0, 23, &NO_NAMES, &NO_NAMES),
            day_of_month: parse_field(dom, 1, 31, &NO_NAMES, &NO_NAMES),
            month: parse_field(mon, 1, 12, &MONTH_NAMES, &MONTH_ABBREVIATIONS),
            day_of_week: parse_field(dow, 0, 6, &DAY_NAMES, &DAY_ABBREVIATIONS),
            year: None,
        }),
        [s, m, h, dom, mon, dow, y] => Ok(ParsedCron {
            seconds: Some(parse_field(s, 0, 59, &NO_NAMES, &NO_NAMES)),
            minutes: parse_field(m, 0, 59, &NO_NAMES, &NO_NAMES),
            hours: parse_field(h, 0, 23, &NO_NAMES, &NO_NAMES),
            day_of_month: parse_field(dom, 1, 31, &NO_NAMES, &NO_NAMES),
            month: parse_field(mon, 1, 12, &MONTH_NAMES, &MONTH_ABBREVIATIONS),
            day_of_week: parse_field(dow, 0, 6, &DAY_NAMES, &DAY_ABBREVIATIONS),
            year: Some(parse_field(y, 1970, 3000, &NO_NAMES, &NO_NAMES)),
        }),
        other => Err(ParseError::FieldCount(other.len())),
    }
}

impl ParsedCron {
    /// Human-readable schedule phrase.
    pub fn summary(&self) -> String {
        summary::summary(self)
    }

    /// Approximate preview of the next five runs after `now`.
    pub fn next_runs(&self, now: NaiveDateTime) -> Vec<NaiveDateTime> {
        preview::next_runs(self, now)
    }
}
