//! Cron expression synthesis.

use chrono::Timelike;

use crate::{Frequency, RecurrencePattern};

/// Render the pattern as a 6-field cron expression, Quartz style: seconds
/// first, `?` in whichever day field the pattern does not constrain.
pub fn cron_expression(pattern: &RecurrencePattern) -> String {
    let minutes = pattern.time.minute();
    let hours = pattern.time.hour();

    match pattern.frequency {
        Frequency::Daily => {
            if pattern.interval == 1 {
                format!("0 {minutes} {hours} * * ?")
            } else {
                format!("0 {minutes} {hours} */{} * ?", pattern.interval)
            }
        }
        Frequency::Weekly => {
            if pattern.weekly_days.is_empty() {
                // Fallback only; generate() rejects an empty day list first.
                return format!("0 {minutes} {hours} ? * MON");
            }
            let days = pattern
                .weekly_days
                .iter()
                .map(|d| d.cron_number().to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("0 {minutes} {hours} ? * {days}")
        }
        Frequency::Monthly => {
            let date = pattern.monthly_date.unwrap_or(1);
            if pattern.interval == 1 {
                format!("0 {minutes} {hours} {date} * ?")
            } else {
                format!("0 {minutes} {hours} {date} */{} ?", pattern.interval)
            }
        }
    }
}
