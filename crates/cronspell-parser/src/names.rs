//! Month and weekday lookup tables.
//!
//! Tables are ordered `(key, value)` pairs probed case-insensitively.
//! Name tables are keyed by numeric code ("1" → "January"); abbreviation
//! tables map three-letter codes to numeric codes ("JAN" → "1"). Day 7 maps
//! to Sunday alongside day 0, per the common cron convention.

/// Month number → full English name.
pub const MONTH_NAMES: [(&str, &str); 12] = [
    ("1", "January"),
    ("2", "February"),
    ("3", "March"),
    ("4", "April"),
    ("5", "May"),
    ("6", "June"),
    ("7", "July"),
    ("8", "August"),
    ("9", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// Three-letter month abbreviation → month number.
pub const MONTH_ABBREVIATIONS: [(&str, &str); 12] = [
    ("JAN", "1"),
    ("FEB", "2"),
    ("MAR", "3"),
    ("APR", "4"),
    ("MAY", "5"),
    ("JUN", "6"),
    ("JUL", "7"),
    ("AUG", "8"),
    ("SEP", "9"),
    ("OCT", "10"),
    ("NOV", "11"),
    ("DEC", "12"),
];

/// Weekday number → full English name. Both 0 and 7 are Sunday.
pub const DAY_NAMES: [(&str, &str); 8] = [
    ("0", "Sunday"),
    ("1", "Monday"),
    ("2", "Tuesday"),
    ("3", "Wednesday"),
    ("4", "Thursday"),
    ("5", "Friday"),
    ("6", "Saturday"),
    ("7", "Sunday"),
];

/// Three-letter weekday abbreviation → weekday number (0 = Sunday).
pub const DAY_ABBREVIATIONS: [(&str, &str); 7] = [
    ("SUN", "0"),
    ("MON", "1"),
    ("TUE", "2"),
    ("WED", "3"),
    ("THU", "4"),
    ("FRI", "5"),
    ("SAT", "6"),
];

/// Empty table for fields with purely numeric values.
pub const NO_NAMES: [(&str, &str); 0] = [];

/// Display name for a month number, falling back to the number itself.
pub fn month_name(value: i64) -> String {
    lookup(&MONTH_NAMES, &value.to_string())
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Display name for a weekday number, falling back to the number itself.
pub fn day_name(value: i64) -> String {
    lookup(&DAY_NAMES, &value.to_string())
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Case-insensitive table probe.
fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    let key = key.to_ascii_uppercase();
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve a token to its numeric code string: abbreviation hit, or the
/// token unchanged.
pub(crate) fn resolve_code(token: &str, abbreviations: &[(&str, &str)]) -> String {
    lookup(abbreviations, token)
        .map(str::to_string)
        .unwrap_or_else(|| token.to_string())
}

/// Resolve a token to an integer via the abbreviation table. None when
/// neither the abbreviation nor the token itself parses as a number.
pub(crate) fn resolve_value(token: &str, abbreviations: &[(&str, &str)]) -> Option<i64> {
    resolve_code(token, abbreviations).parse().ok()
}

/// Resolve a token to its display name: direct name hit, name of the
/// resolved code, or the token unchanged.
pub(crate) fn resolve_name(
    token: &str,
    names: &[(&str, &str)],
    abbreviations: &[(&str, &str)],
) -> String {
    if let Some(name) = lookup(names, token) {
        return name.to_string();
    }
    if let Some(name) = lookup(names, &resolve_code(token, abbreviations)) {
        return name.to_string();
    }
    token.to_string()
}
