//! cronspell-recurrence: recurrence patterns to cron schedules.
//!
//! Turns a structured daily/weekly/monthly recurrence pattern into a cron
//! expression, a human-readable description, and a bounded preview of
//! upcoming run times. Independent of the parser crate; the two share only
//! domain vocabulary.

pub mod describe;
pub mod expression;
pub mod projection;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("weekly pattern requires at least one selected day")]
    NoWeeklyDays,
    #[error("monthly pattern requires a day of month")]
    NoMonthlyDate,
    #[error("repeat interval must be at least 1")]
    ZeroInterval,
    #[error("day of month must be between 1 and 31, got {0}")]
    MonthlyDateOutOfRange(u32),
    #[error("occurrence count must be between 1 and 100, got {0}")]
    OccurrencesOutOfRange(u32),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Day of week, identified by its three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Three-letter code, e.g. "MON".
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Sun => "SUN",
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
        }
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }

    /// Zero-based day number, 0 = Sunday through 6 = Saturday. Used by the
    /// run projection.
    pub fn day_number(self) -> u32 {
        self as u32
    }

    /// One-based cron day number, 1 = Sunday through 7 = Saturday. This is
    /// the Quartz-dialect numbering emitted in generated expressions, one
    /// off from `day_number`.
    pub fn cron_number(self) -> u32 {
        self as u32 + 1
    }

    /// Parse a three-letter code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Weekday> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.code().eq_ignore_ascii_case(code))
    }
}

/// How often a pattern repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// When the recurrence stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCondition {
    #[default]
    Never,
    /// Stop once a projected run falls after this date.
    OnDate(NaiveDate),
    /// Stop after this many runs (1..=100).
    AfterOccurrences(u32),
}

/// A structured recurrence pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrencePattern {
    pub frequency: Frequency,
    /// Time of day each run fires at.
    pub time: NaiveTime,
    /// Repeat every N days/weeks/months. Must be at least 1.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Selected days for weekly patterns, in selection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekly_days: Vec<Weekday>,
    /// Selected day of month for monthly patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_date: Option<u32>,
    #[serde(default)]
    pub end: EndCondition,
}

fn default_interval() -> u32 {
    1
}

impl RecurrencePattern {
    /// A pattern that runs every day at `time`.
    pub fn daily(time: NaiveTime) -> Self {
        Self {
            frequency: Frequency::Daily,
            time,
            interval: 1,
            weekly_days: Vec::new(),
            monthly_date: None,
            end: EndCondition::Never,
        }
    }

    /// A pattern that runs on the given days each week at `time`.
    pub fn weekly(time: NaiveTime, days: Vec<Weekday>) -> Self {
        Self {
            frequency: Frequency::Weekly,
            weekly_days: days,
            ..Self::daily(time)
        }
    }

    /// A pattern that runs on the given day of each month at `time`.
    pub fn monthly(time: NaiveTime, date: u32) -> Self {
        Self {
            frequency: Frequency::Monthly,
            monthly_date: Some(date),
            ..Self::daily(time)
        }
    }

    /// Repeat every `interval` days/weeks/months instead of every one.
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Stop once a run falls after `date`.
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.end = EndCondition::OnDate(date);
        self
    }

    /// Stop after `count` runs.
    pub fn for_occurrences(mut self, count: u32) -> Self {
        self.end = EndCondition::AfterOccurrences(count);
        self
    }

    /// Check generation preconditions.
    pub fn validate(&self) -> Result<()> {
        if self.interval < 1 {
            return Err(ValidationError::ZeroInterval);
        }
        match self.frequency {
            Frequency::Weekly if self.weekly_days.is_empty() => {
                return Err(ValidationError::NoWeeklyDays);
            }
            Frequency::Monthly => match self.monthly_date {
                None => return Err(ValidationError::NoMonthlyDate),
                Some(date) if !(1..=31).contains(&date) => {
                    return Err(ValidationError::MonthlyDateOutOfRange(date));
                }
                _ => {}
            },
            _ => {}
        }
        if let EndCondition::AfterOccurrences(count) = self.end {
            if !(1..=100).contains(&count) {
                return Err(ValidationError::OccurrencesOutOfRange(count));
            }
        }
        Ok(())
    }
}

/// A generated schedule: the pattern plus everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    pub pattern: RecurrencePattern,
    pub cron_expression: String,
    pub description: String,
    pub next_runs: Vec<NaiveDateTime>,
}

/// Generate a schedule anchored at the current local time.
pub fn generate(pattern: &RecurrencePattern) -> Result<GeneratedSchedule> {
    generate_from(pattern, Local::now().naive_local())
}

/// Generate a schedule anchored at an explicit `now`.
pub fn generate_from(pattern: &RecurrencePattern, now: NaiveDateTime) -> Result<GeneratedSchedule> {
    pattern.validate()?;

    let cron_expression = expression::cron_expression(pattern);
    debug!(%cron_expression, "generated schedule");

    Ok(GeneratedSchedule {
        pattern: pattern.clone(),
        cron_expression,
        description: describe::description(pattern),
        next_runs: projection::next_runs(pattern, now),
    })
}
