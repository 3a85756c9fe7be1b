// Day Planner
// Command-line entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use day_planner::models::date_key::DateKey;
use day_planner::models::time_of_day::TimeOfDay;
use day_planner::services::database::Database;
use day_planner::services::settings::SettingsService;

#[derive(Parser)]
#[command(name = "day-planner")]
#[command(about = "Plan your days in conflict-free time blocks")]
struct Cli {
    /// Settings file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Print the date key of this day of the shown month
        #[arg(long)]
        select: Option<u32>,

        /// Show the month containing this day (YYYY-MM-DD) with the day selected
        #[arg(long, conflicts_with_all = ["year", "month", "select"])]
        date: Option<DateKey>,
    },
    /// List or search the events of a day
    Events {
        /// Day as YYYY-MM-DD
        date: DateKey,

        /// Only show events whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add an event to a day
    Add {
        date: DateKey,

        #[arg(short, long)]
        name: String,

        /// Start time as HH:MM
        #[arg(short, long)]
        start: TimeOfDay,

        /// End time as HH:MM
        #[arg(short, long)]
        end: TimeOfDay,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Change fields of an existing event
    Edit {
        date: DateKey,
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        start: Option<TimeOfDay>,

        #[arg(short, long)]
        end: Option<TimeOfDay>,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an event
    Delete { date: DateKey, id: String },
    /// List the days that have stored events
    Days,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = settings_service.get()?;
    log::debug!("Using settings from {}", settings_service.path().display());

    let database_override = cli.database;
    let open_database = || -> Result<Database> {
        let db_path = match database_override {
            Some(ref path) => path.clone(),
            None => SettingsService::database_path(&settings)?,
        };
        let database = Database::open_file(&db_path)?;
        database.initialize_schema()?;
        log::info!("Opened planner database at {}", db_path.display());
        Ok(database)
    };

    match cli.command {
        Commands::Month {
            year,
            month,
            select,
            date,
        } => match date {
            Some(date) => commands::month::run_for_date(&settings, date),
            None => commands::month::run(&settings, year, month.map(|m| m - 1), select),
        },
        Commands::Events { date, search } => {
            commands::events::list(&open_database()?, &settings, date, search.as_deref())
        }
        Commands::Add {
            date,
            name,
            start,
            end,
            description,
        } => commands::events::add(
            &open_database()?,
            &settings,
            date,
            name,
            start,
            end,
            description,
        ),
        Commands::Edit {
            date,
            id,
            name,
            start,
            end,
            description,
        } => commands::events::edit(
            &open_database()?,
            &settings,
            date,
            id,
            commands::events::patch(name, start, end, description),
        ),
        Commands::Delete { date, id } => {
            commands::events::delete(&open_database()?, &settings, date, id)
        }
        Commands::Days => commands::events::days(&open_database()?),
    }
}
