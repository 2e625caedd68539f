//! Single cron field parsing.

use serde::{Deserialize, Serialize};

use crate::names::{resolve_code, resolve_name, resolve_value};

/// The syntax form a field was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// `*`: every value.
    All,
    /// `?`: no specific value.
    Any,
    /// `range/N`: every Nth value within a range.
    Step,
    /// `start-end`: an inclusive range.
    Range,
    /// `a,b,c`: an explicit list.
    List,
    /// A single value.
    Specific,
}

/// One parsed cron field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedField {
    /// Original field text.
    pub raw: String,
    /// Detected syntax form.
    pub kind: FieldKind,
    /// Concrete values the field covers. Empty for All and Any; tokens that
    /// resolve to no integer are dropped.
    pub values: Vec<i64>,
    /// Human-readable rendering.
    pub description: String,
}

/// Field syntax, checked in priority order. A field never mixes forms: the
/// first matching classification wins.
enum Syntax<'a> {
    All,
    Any,
    Step { range: &'a str, step: &'a str },
    Range { start: &'a str, end: &'a str },
    List(&'a str),
    Single(&'a str),
}

fn classify(field: &str) -> Syntax<'_> {
    if field == "*" {
        return Syntax::All;
    }
    if field == "?" {
        return Syntax::Any;
    }
    if let Some((range, step)) = field.split_once('/') {
        return Syntax::Step { range, step };
    }
    if let Some((start, end)) = field.split_once('-') {
        return Syntax::Range { start, end };
    }
    if field.contains(',') {
        return Syntax::List(field);
    }
    Syntax::Single(field)
}

/// Parse one cron field against its value range and name tables.
///
/// Resolved values are not validated against `min`/`max`: out-of-range input
/// passes through unchanged. Unknown abbreviations fall back to the raw
/// token in descriptions.
pub fn parse_field(
    field: &str,
    min: i64,
    max: i64,
    names: &[(&str, &str)],
    abbreviations: &[(&str, &str)],
) -> ParsedField {
    match classify(field) {
        Syntax::All => ParsedField {
            raw: field.to_string(),
            kind: FieldKind::All,
            values: Vec::new(),
            description: "Every value".to_string(),
        },
        Syntax::Any => ParsedField {
            raw: field.to_string(),
            kind: FieldKind::Any,
            values: Vec::new(),
            description: "Any value (no specific value)".to_string(),
        },
        Syntax::Step { range, step } => {
            parse_step(field, range, step, min, max, names, abbreviations)
        }
        Syntax::Range { start, end } => {
            let values = match (
                resolve_value(start, abbreviations),
                resolve_value(end, abbreviations),
            ) {
                (Some(s), Some(e)) => (s..=e).collect(),
                _ => Vec::new(),
            };
            let start_name = resolve_name(start, names, abbreviations);
            let end_name = resolve_name(end, names, abbreviations);
            ParsedField {
                raw: field.to_string(),
                kind: FieldKind::Range,
                values,
                description: format!("From {start_name} to {end_name}"),
            }
        }
        Syntax::List(list) => {
            let tokens: Vec<&str> = list.split(',').collect();
            let values = tokens
                .iter()
                .filter_map(|t| resolve_value(t, abbreviations))
                .collect();
            let names_list: Vec<String> = tokens
                .iter()
                .map(|t| resolve_name(t, names, abbreviations))
                .collect();
            ParsedField {
                raw: field.to_string(),
                kind: FieldKind::List,
                values,
                description: names_list.join(", "),
            }
        }
        Syntax::Single(token) => {
            let values = resolve_value(token, abbreviations).into_iter().collect();
            ParsedField {
                raw: field.to_string(),
                kind: FieldKind::Specific,
                values,
                description: resolve_name(token, names, abbreviations),
            }
        }
    }
}

fn parse_step(
    field: &str,
    range: &str,
    step: &str,
    min: i64,
    max: i64,
    names: &[(&str, &str)],
    abbreviations: &[(&str, &str)],
) -> ParsedField {
    let step_num = step.parse::<i64>().unwrap_or(1);
    // A stride below 1 would never terminate; iterate as 1 but keep the
    // written step in the description.
    let stride = step_num.max(1);
    let suffix = ordinal_suffix(step_num);

    let (values, description) = if range == "*" {
        (
            stepped(min, max, stride),
            format!("Every {step_num}{suffix} value"),
        )
    } else if let Some((start, end)) = range.split_once('-') {
        let start_code = resolve_code(start, abbreviations);
        let end_code = resolve_code(end, abbreviations);
        let values = match (start_code.parse::<i64>(), end_code.parse::<i64>()) {
            (Ok(s), Ok(e)) => stepped(s, e, stride),
            _ => Vec::new(),
        };
        let start_name = resolve_name(&start_code, names, abbreviations);
        let end_name = resolve_name(&end_code, names, abbreviations);
        (
            values,
            format!("Every {step_num}{suffix} from {start_name} to {end_name}"),
        )
    } else {
        let start_code = resolve_code(range, abbreviations);
        let values = match start_code.parse::<i64>() {
            Ok(s) => stepped(s, max, stride),
            Err(_) => Vec::new(),
        };
        let start_name = resolve_name(range, names, abbreviations);
        (
            values,
            format!("Every {step_num}{suffix} starting from {start_name}"),
        )
    };

    ParsedField {
        raw: field.to_string(),
        kind: FieldKind::Step,
        values,
        description,
    }
}

fn stepped(start: i64, end: i64, stride: i64) -> Vec<i64> {
    let mut values = Vec::new();
    let mut v = start;
    while v <= end {
        values.push(v);
        v += stride;
    }
    values
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal_suffix(n: i64) -> &'static str {
    let ones = n % 10;
    let tens = n % 100;
    if ones == 1 && tens != 11 {
        "st"
    } else if ones == 2 && tens != 12 {
        "nd"
    } else if ones == 3 && tens != 13 {
        "rd"
    } else {
        "th"
    }
}
