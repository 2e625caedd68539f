//! Built-in example expressions.

use cronspell_parser::parse;

/// Named example expressions covering the common field syntaxes.
const PRESETS: &[(&str, &str)] = &[
    ("weekday-mornings", "0 30 9 * * MON-FRI"),
    ("every-15-minutes", "*/15 * * * *"),
    ("hourly", "0 0 * * * ?"),
    ("daily-midnight", "0 0 0 * * ?"),
    ("first-of-month", "0 0 9 1 * ?"),
    ("summer-saturdays", "0 0 10 ? JUN-AUG SAT"),
    ("new-year-2030", "0 0 0 1 JAN ? 2030"),
];

pub fn run() -> anyhow::Result<()> {
    for (name, expression) in PRESETS {
        let summary = parse(expression)?.summary();
        println!("{name:<18} {expression:<24} {summary}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_parse() {
        for (name, expression) in PRESETS {
            assert!(parse(expression).is_ok(), "preset {name} failed to parse");
        }
    }
}
