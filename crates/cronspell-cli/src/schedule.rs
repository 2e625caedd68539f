//! The `daily`/`weekly`/`monthly` subcommands: schedule generation.

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use tracing::debug;

use cronspell_recurrence::{RecurrencePattern, Weekday, generate};

#[derive(Args)]
pub struct CommonArgs {
    /// Time of day to run at, 24-hour "HH:MM"
    #[arg(short, long, default_value = "09:00")]
    time: String,

    /// Repeat every N days/weeks/months
    #[arg(short, long, default_value_t = 1)]
    every: u32,

    /// Stop on this date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "count")]
    until: Option<NaiveDate>,

    /// Stop after this many runs (1-100)
    #[arg(long)]
    count: Option<u32>,

    /// Emit the generated schedule as JSON
    #[arg(long)]
    json: bool,
}

pub enum PatternArgs {
    Daily,
    Weekly(Vec<String>),
    Monthly(u32),
}

pub fn run(kind: PatternArgs, common: CommonArgs) -> anyhow::Result<()> {
    let pattern = build_pattern(kind, &common)?;
    debug!(frequency = ?pattern.frequency, interval = pattern.interval, "generating schedule");
    let schedule = generate(&pattern)?;

    if common.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!("Expression:  {}", schedule.cron_expression);
    println!("Description: {}", schedule.description);
    if schedule.next_runs.is_empty() {
        println!("No upcoming runs");
    } else {
        println!("Next runs:");
        for run in &schedule.next_runs {
            println!("  {}", run.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(())
}

fn build_pattern(kind: PatternArgs, common: &CommonArgs) -> anyhow::Result<RecurrencePattern> {
    let time = NaiveTime::parse_from_str(&common.time, "%H:%M")
        .with_context(|| format!("invalid time of day: {}", common.time))?;

    let mut pattern = match kind {
        PatternArgs::Daily => RecurrencePattern::daily(time),
        PatternArgs::Weekly(days) => {
            let days = days
                .iter()
                .map(|code| {
                    Weekday::from_code(code)
                        .ok_or_else(|| anyhow::anyhow!("unknown weekday code: {code}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            RecurrencePattern::weekly(time, days)
        }
        PatternArgs::Monthly(date) => RecurrencePattern::monthly(time, date),
    };

    pattern = pattern.with_interval(common.every);
    if let Some(date) = common.until {
        pattern = pattern.until(date);
    } else if let Some(count) = common.count {
        pattern = pattern.for_occurrences(count);
    }

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronspell_recurrence::{EndCondition, Frequency};

    fn common(time: &str) -> CommonArgs {
        CommonArgs {
            time: time.to_string(),
            every: 1,
            until: None,
            count: None,
            json: false,
        }
    }

    #[test]
    fn test_build_weekly_pattern() {
        let args = common("14:30");
        let kind = PatternArgs::Weekly(vec!["mon".into(), "WED".into(), "Fri".into()]);
        let pattern = build_pattern(kind, &args).unwrap();
        assert_eq!(pattern.frequency, Frequency::Weekly);
        assert_eq!(
            pattern.weekly_days,
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        assert_eq!(pattern.time.format("%H:%M").to_string(), "14:30");
    }

    #[test]
    fn test_build_pattern_rejects_bad_time() {
        let args = common("25:99");
        assert!(build_pattern(PatternArgs::Daily, &args).is_err());
    }

    #[test]
    fn test_build_pattern_rejects_unknown_day() {
        let args = common("09:00");
        let kind = PatternArgs::Weekly(vec!["funday".into()]);
        assert!(build_pattern(kind, &args).is_err());
    }

    #[test]
    fn test_build_pattern_end_conditions() {
        let mut args = common("09:00");
        args.count = Some(12);
        let pattern = build_pattern(PatternArgs::Monthly(15), &args).unwrap();
        assert_eq!(pattern.end, EndCondition::AfterOccurrences(12));
        assert_eq!(pattern.monthly_date, Some(15));
    }
}
