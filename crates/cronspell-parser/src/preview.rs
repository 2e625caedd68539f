//! Approximate next-run preview.
//!
//! Not a cron evaluator. The preview only looks at the minutes field and
//! extrapolates five timestamps from it; every other field is ignored. This
//! keeps the preview cheap and bounded at the cost of accuracy, which is the
//! intended trade-off for a display hint.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::field::{FieldKind, ParsedField};
use crate::ParsedCron;

/// Project five approximate upcoming runs after `now`.
///
/// Minutes written as a step advance by the gap between the first two
/// resolved values, compounding per entry. A specific minute is pinned and
/// the hour advanced. Everything else falls back to five-minute increments.
pub fn next_runs(parsed: &ParsedCron, now: NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut runs = Vec::with_capacity(5);
    for i in 1..=5 {
        match nth_run(&parsed.minutes, now, i) {
            Some(run) => runs.push(run),
            None => break,
        }
    }
    runs
}

fn nth_run(minutes: &ParsedField, now: NaiveDateTime, i: i64) -> Option<NaiveDateTime> {
    if minutes.kind == FieldKind::Step && minutes.values.len() >= 2 {
        let gap = match minutes.values[1] - minutes.values[0] {
            0 => 1,
            g => g,
        };
        let total = Duration::try_minutes(gap.checked_mul(i)?)?;
        return now.checked_add_signed(total);
    }

    if minutes.kind == FieldKind::Specific {
        if let Some(&minute) = minutes.values.first() {
            let pinned = now
                .date()
                .and_hms_opt(now.hour(), minute.rem_euclid(60) as u32, now.second())?;
            return pinned.checked_add_signed(Duration::hours(i));
        }
    }

    now.checked_add_signed(Duration::minutes(5 * i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 16)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_step_minutes_compound_by_gap() {
        let parsed = parse("*/10 * * * *").unwrap();
        let runs = parsed.next_runs(at(9, 0));
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], at(9, 10));
        assert_eq!(runs[1], at(9, 20));
        assert_eq!(runs[4], at(9, 50));
    }

    #[test]
    fn test_specific_minute_pins_and_advances_hours() {
        let parsed = parse("30 * * * *").unwrap();
        let runs = parsed.next_runs(at(9, 5));
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], at(10, 30));
        assert_eq!(runs[1], at(11, 30));
        assert_eq!(runs[4], at(14, 30));
    }

    #[test]
    fn test_wildcard_minutes_fall_back_to_five() {
        let parsed = parse("* * * * *").unwrap();
        let runs = parsed.next_runs(at(9, 0));
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], at(9, 5));
        assert_eq!(runs[4], at(9, 25));
    }

    #[test]
    fn test_single_value_step_falls_back() {
        // "58/5" only covers 58, so there is no gap to extrapolate from
        let parsed = parse("58/5 * * * *").unwrap();
        assert_eq!(parsed.minutes.values, vec![58]);
        let runs = parsed.next_runs(at(9, 0));
        assert_eq!(runs[0], at(9, 5));
    }

    #[test]
    fn test_preview_crosses_midnight() {
        let parsed = parse("* * * * *").unwrap();
        let runs = parsed.next_runs(at(23, 58));
        assert_eq!(
            runs[0],
            NaiveDate::from_ymd_opt(2025, 6, 17)
                .unwrap()
                .and_hms_opt(0, 3, 0)
                .unwrap()
        );
    }
}
