//! The `parse` subcommand: cron expression breakdown.

use chrono::Local;
use cronspell_parser::{ParsedField, parse};

pub fn run(expression: &str, json: bool) -> anyhow::Result<()> {
    let parsed = parse(expression)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("Expression: {expression}");
    println!();
    print_field("Seconds", parsed.seconds.as_ref());
    print_field("Minutes", Some(&parsed.minutes));
    print_field("Hours", Some(&parsed.hours));
    print_field("Day of month", Some(&parsed.day_of_month));
    print_field("Month", Some(&parsed.month));
    print_field("Day of week", Some(&parsed.day_of_week));
    print_field("Year", parsed.year.as_ref());
    println!();
    println!("{}", parsed.summary());
    println!();
    println!("Approximate next runs:");
    for run in parsed.next_runs(Local::now().naive_local()) {
        println!("  {}", run.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn print_field(label: &str, field: Option<&ParsedField>) {
    let Some(field) = field else { return };
    let kind = format!("{:?}", field.kind).to_lowercase();
    println!(
        "  {label:<13} {:<12} {kind:<9} {}",
        field.raw, field.description
    );
    // Value lists longer than 20 entries are elided
    if !field.values.is_empty() && field.values.len() <= 20 {
        let values: Vec<String> = field.values.iter().map(|v| v.to_string()).collect();
        println!("  {:<13} matches: {}", "", values.join(", "));
    }
}
