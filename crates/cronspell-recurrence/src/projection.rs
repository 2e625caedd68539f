//! Bounded projection of upcoming runs.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};

use crate::{EndCondition, Frequency, RecurrencePattern, Weekday};

/// Project upcoming runs from `now`.
///
/// Bounded to `min(occurrences, 10)` results, or 5 when no occurrence limit
/// is set. Stops early when a run falls after an `OnDate` end or when a
/// step cannot form a valid date.
pub fn next_runs(pattern: &RecurrencePattern, now: NaiveDateTime) -> Vec<NaiveDateTime> {
    let interval = pattern.interval.max(1);
    let max_runs = match pattern.end {
        EndCondition::AfterOccurrences(count) => count.min(10),
        _ => 5,
    } as usize;

    let mut anchor = now.date().and_time(pattern.time);
    if anchor <= now {
        anchor += Duration::days(1);
    }

    let mut runs = Vec::with_capacity(max_runs);
    while runs.len() < max_runs {
        let run = match pattern.frequency {
            Frequency::Daily => Some(anchor),
            Frequency::Weekly => next_weekly_run(anchor, &pattern.weekly_days),
            Frequency::Monthly => {
                next_monthly_run(anchor, pattern.monthly_date.unwrap_or(1))
            }
        };
        let Some(run) = run else { break };

        if let EndCondition::OnDate(end) = pattern.end {
            if run.date() > end {
                break;
            }
        }
        runs.push(run);

        let advanced = match pattern.frequency {
            Frequency::Daily => run.checked_add_signed(Duration::days(interval as i64)),
            Frequency::Weekly => run.checked_add_signed(Duration::days(7 * interval as i64)),
            Frequency::Monthly => run.checked_add_months(Months::new(interval)),
        };
        match advanced {
            Some(next) => anchor = next,
            None => break,
        }
    }

    runs
}

/// First selected weekday on or after the anchor, wrapping into the next
/// week when the anchor sits past every selected day.
fn next_weekly_run(anchor: NaiveDateTime, days: &[Weekday]) -> Option<NaiveDateTime> {
    let mut targets: Vec<u32> = days.iter().map(|d| d.day_number()).collect();
    targets.sort_unstable();
    let current = anchor.weekday().num_days_from_sunday();

    if let Some(&target) = targets.iter().find(|&&t| t >= current) {
        return anchor.checked_add_signed(Duration::days((target - current) as i64));
    }
    let first = *targets.first()?;
    anchor.checked_add_signed(Duration::days((7 - current + first) as i64))
}

/// The target day of month in the anchor's month, rolled to the next month
/// when it lands on or before the anchor's day, clamped to the month's
/// length when the month is too short.
fn next_monthly_run(anchor: NaiveDateTime, target_day: u32) -> Option<NaiveDateTime> {
    let mut year = anchor.year();
    let mut month = anchor.month();
    if target_day <= anchor.day() {
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    let day = target_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(anchor.time()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecurrencePattern;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    // 2025-06-16 is a Monday.

    #[test]
    fn test_daily_runs_from_tomorrow_when_time_passed() {
        let pattern = RecurrencePattern::daily(nine_am());
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], at(2025, 6, 17, 9, 0));
        assert_eq!(runs[4], at(2025, 6, 21, 9, 0));
    }

    #[test]
    fn test_daily_runs_today_when_time_ahead() {
        let pattern = RecurrencePattern::daily(nine_am());
        let runs = next_runs(&pattern, at(2025, 6, 16, 8, 0));
        assert_eq!(runs[0], at(2025, 6, 16, 9, 0));
    }

    #[test]
    fn test_daily_interval_spacing() {
        let pattern = RecurrencePattern::daily(nine_am()).with_interval(3);
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs[0], at(2025, 6, 17, 9, 0));
        assert_eq!(runs[1], at(2025, 6, 20, 9, 0));
        assert_eq!(runs[2], at(2025, 6, 23, 9, 0));
    }

    #[test]
    fn test_weekly_finds_next_selected_day() {
        // Anchor lands on Tuesday the 17th; next selected day is Wednesday
        let pattern = RecurrencePattern::weekly(nine_am(), vec![Weekday::Wed]);
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs[0], at(2025, 6, 18, 9, 0));
        assert_eq!(runs[1], at(2025, 6, 25, 9, 0));
    }

    #[test]
    fn test_weekly_wraps_to_next_week() {
        // Anchor Tuesday; Monday already passed this week
        let pattern = RecurrencePattern::weekly(nine_am(), vec![Weekday::Mon]);
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs[0], at(2025, 6, 23, 9, 0));
    }

    #[test]
    fn test_weekly_projects_first_match_per_window() {
        // Only the earliest selected day in each window is projected; the
        // window then jumps a whole week. Preserved approximation.
        let pattern =
            RecurrencePattern::weekly(nine_am(), vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        let runs = next_runs(&pattern, at(2025, 6, 15, 10, 0));
        assert_eq!(runs[0], at(2025, 6, 16, 9, 0));
        assert_eq!(runs[1], at(2025, 6, 23, 9, 0));
        assert_eq!(runs[2], at(2025, 6, 30, 9, 0));
    }

    #[test]
    fn test_weekly_interval_spacing() {
        let pattern =
            RecurrencePattern::weekly(nine_am(), vec![Weekday::Wed]).with_interval(2);
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs[0], at(2025, 6, 18, 9, 0));
        assert_eq!(runs[1], at(2025, 7, 2, 9, 0));
    }

    #[test]
    fn test_monthly_clamps_short_months() {
        let pattern =
            RecurrencePattern::monthly(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), 31);
        let runs = next_runs(&pattern, at(2025, 4, 10, 12, 0));
        assert_eq!(runs[0].date(), date(2025, 4, 30));
        assert_eq!(runs[1].date(), date(2025, 5, 31));
        assert_eq!(runs[2].date(), date(2025, 6, 30));
        assert_eq!(runs[3].date(), date(2025, 7, 31));
        // Aug 31 equals the advanced anchor, which rolls onward
        assert_eq!(runs[4].date(), date(2025, 9, 30));
    }

    #[test]
    fn test_monthly_rolls_past_anchor_day() {
        // The target on or before the anchor's day rolls a month forward,
        // so the interval advance plus the roll lands every other month
        let pattern = RecurrencePattern::monthly(nine_am(), 5);
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs[0], at(2025, 7, 5, 9, 0));
        assert_eq!(runs[1], at(2025, 9, 5, 9, 0));
    }

    #[test]
    fn test_monthly_interval_spacing() {
        let pattern = RecurrencePattern::monthly(nine_am(), 1).with_interval(2);
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs[0], at(2025, 7, 1, 9, 0));
        assert_eq!(runs[1], at(2025, 10, 1, 9, 0));
        assert_eq!(runs[2], at(2026, 1, 1, 9, 0));
    }

    #[test]
    fn test_february_clamp() {
        let pattern =
            RecurrencePattern::monthly(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), 30);
        let runs = next_runs(&pattern, at(2025, 1, 31, 12, 0));
        assert_eq!(runs[0].date(), date(2025, 2, 28));
        assert_eq!(runs[1].date(), date(2025, 3, 30));
    }

    #[test]
    fn test_occurrence_limit_and_cap() {
        let pattern = RecurrencePattern::daily(nine_am()).for_occurrences(3);
        assert_eq!(next_runs(&pattern, at(2025, 6, 16, 10, 0)).len(), 3);

        // The projection never yields more than 10 even for larger limits
        let pattern = RecurrencePattern::daily(nine_am()).for_occurrences(50);
        assert_eq!(next_runs(&pattern, at(2025, 6, 16, 10, 0)).len(), 10);
    }

    #[test]
    fn test_end_date_stops_projection() {
        let pattern = RecurrencePattern::daily(nine_am()).until(date(2025, 6, 18));
        let runs = next_runs(&pattern, at(2025, 6, 16, 10, 0));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1], at(2025, 6, 18, 9, 0));
    }

    #[test]
    fn test_empty_weekly_days_yield_nothing() {
        // Unreachable through generate(), which validates first
        let mut pattern = RecurrencePattern::daily(nine_am());
        pattern.frequency = Frequency::Weekly;
        assert!(next_runs(&pattern, at(2025, 6, 16, 10, 0)).is_empty());
    }
}
