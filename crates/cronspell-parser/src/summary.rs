//! Human-readable schedule phrases.

use crate::field::{FieldKind, ParsedField};
use crate::ParsedCron;

/// Build a schedule phrase from the parsed fields.
///
/// Fields are scanned in fixed order (seconds through year); a field
/// contributes only when it constrains the schedule (kind other than All,
/// with Any also silent for the two day fields). When nothing contributes
/// the schedule fires continuously.
pub fn summary(parsed: &ParsedCron) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(seconds) = &parsed.seconds {
        push_clock_part(&mut parts, seconds, "seconds");
    }
    push_clock_part(&mut parts, &parsed.minutes, "minutes");

    match parsed.hours.kind {
        FieldKind::All => {}
        FieldKind::Step => parts.push(format!(
            "every {}",
            parsed.hours.description.to_lowercase()
        )),
        _ => parts.push(format!("at {}:00", parsed.hours.description)),
    }

    if !matches!(parsed.day_of_month.kind, FieldKind::All | FieldKind::Any) {
        parts.push(format!("on {} of the month", parsed.day_of_month.description));
    }
    if parsed.month.kind != FieldKind::All {
        parts.push(format!("in {}", parsed.month.description));
    }
    if !matches!(parsed.day_of_week.kind, FieldKind::All | FieldKind::Any) {
        parts.push(format!("on {}", parsed.day_of_week.description));
    }
    if let Some(year) = &parsed.year {
        if year.kind != FieldKind::All {
            parts.push(format!("in {}", year.description));
        }
    }

    if parts.is_empty() {
        return "Runs every second".to_string();
    }
    format!("Runs {}", parts.join(" "))
}

fn push_clock_part(parts: &mut Vec<String>, field: &ParsedField, unit: &str) {
    match field.kind {
        FieldKind::All => {}
        FieldKind::Step => parts.push(format!("every {}", field.description.to_lowercase())),
        _ => parts.push(format!("at {} {unit}", field.description)),
    }
}
