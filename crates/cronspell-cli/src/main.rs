mod breakdown;
mod presets;
mod schedule;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cronspell",
    about = "Cron expression breakdown and recurrence schedule generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a cron expression into a field-by-field breakdown
    Parse {
        /// The cron expression, e.g. "0 30 9 * * MON-FRI"
        expression: String,

        /// Emit the parsed structure as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a schedule that runs every day
    Daily {
        #[command(flatten)]
        common: schedule::CommonArgs,
    },
    /// Generate a schedule that runs on selected weekdays
    Weekly {
        /// Days to run on, e.g. "mon,wed,fri"
        #[arg(short, long, value_delimiter = ',')]
        days: Vec<String>,

        #[command(flatten)]
        common: schedule::CommonArgs,
    },
    /// Generate a schedule that runs on a day of the month
    Monthly {
        /// Day of month to run on (1-31)
        #[arg(short = 'D', long)]
        date: u32,

        #[command(flatten)]
        common: schedule::CommonArgs,
    },
    /// List the built-in example expressions
    Presets,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { expression, json } => breakdown::run(&expression, json),
        Commands::Daily { common } => schedule::run(schedule::PatternArgs::Daily, common),
        Commands::Weekly { days, common } => {
            schedule::run(schedule::PatternArgs::Weekly(days), common)
        }
        Commands::Monthly { date, common } => {
            schedule::run(schedule::PatternArgs::Monthly(date), common)
        }
        Commands::Presets => presets::run(),
    }
}
