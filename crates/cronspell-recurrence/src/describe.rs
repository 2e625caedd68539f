//! Human-readable descriptions of recurrence patterns.

use chrono::{NaiveTime, Timelike};

use crate::{Frequency, RecurrencePattern};

/// Describe the pattern in plain English, e.g.
/// "Every Monday, Wednesday and Friday at 2:30 PM".
pub fn description(pattern: &RecurrencePattern) -> String {
    let time = format_time(pattern.time);

    match pattern.frequency {
        Frequency::Daily => {
            if pattern.interval == 1 {
                format!("Every day at {time}")
            } else {
                format!("Every {} days at {time}", pattern.interval)
            }
        }
        Frequency::Weekly => {
            if pattern.weekly_days.is_empty() {
                // Fallback only; generate() rejects an empty day list first.
                return format!("Every week at {time}");
            }
            let names: Vec<&str> = pattern.weekly_days.iter().map(|d| d.name()).collect();
            let days = match names.len() {
                1 => format!("every {}", names[0]),
                7 => "every day".to_string(),
                n => format!("every {} and {}", names[..n - 1].join(", "), names[n - 1]),
            };
            let weeks = if pattern.interval == 1 {
                String::new()
            } else {
                format!(" (every {} weeks)", pattern.interval)
            };
            format!("{} at {time}{weeks}", capitalize(&days))
        }
        Frequency::Monthly => {
            let date = ordinal(pattern.monthly_date.unwrap_or(1));
            let months = if pattern.interval == 1 {
                "every month".to_string()
            } else {
                format!("every {} months", pattern.interval)
            };
            format!("On the {date} of {months} at {time}")
        }
    }
}

/// 12-hour clock rendering: hour 0 is 12 AM, hour 12 is 12 PM, minutes
/// zero-padded.
pub fn format_time(time: NaiveTime) -> String {
    let hour = time.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display}:{:02} {period}", time.minute())
}

/// Ordinal day rendering by suffix-table probe: index `(n%100 - 20) % 10`
/// first, then `n%100`, defaulting to "th".
fn ordinal(n: u32) -> String {
    const SUFFIXES: [&str; 4] = ["th", "st", "nd", "rd"];
    let value = n as i64 % 100;
    let suffix = probe(&SUFFIXES, (value - 20) % 10)
        .or_else(|| probe(&SUFFIXES, value))
        .unwrap_or(SUFFIXES[0]);
    format!("{n}{suffix}")
}

fn probe(table: &[&'static str], index: i64) -> Option<&'static str> {
    usize::try_from(index).ok().and_then(|i| table.get(i)).copied()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
