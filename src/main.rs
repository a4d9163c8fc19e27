mod commands;
mod config;
mod logging;
mod render;
mod store;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use holiplan_core::color::Theme;

use commands::{Planner, current_year, parse_date};
use config::HoliplanConfig;
use store::Store;

#[derive(Parser)]
#[command(name = "holiplan")]
#[command(about = "Compare public holidays across locations and plan your vacation days")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available locations
    Locations {
        /// Only show the most commonly used locations
        #[arg(long)]
        popular: bool,
    },
    /// Show the holiday grid for a year
    Grid {
        #[arg(short, long)]
        year: Option<i32>,

        /// Location id to show (repeatable; defaults to the configured locations)
        #[arg(short, long = "location")]
        locations: Vec<String>,

        /// Custom calendar id to show (repeatable; defaults to all)
        #[arg(long = "calendar")]
        calendars: Vec<String>,

        /// Also list every holiday by date
        #[arg(short, long)]
        details: bool,
    },
    /// Edit the planned vacation dates
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Vacation days required per location for the planned dates
    Summary {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long = "location")]
        locations: Vec<String>,

        #[arg(long = "calendar")]
        calendars: Vec<String>,

        /// Print CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Preview the colors assigned to a set of ids
    Colors {
        #[arg(required = true)]
        ids: Vec<String>,

        /// "light" or "dark" (defaults to the configured theme)
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// Manage custom calendars
    Calendar {
        #[command(subcommand)]
        command: CalendarCommands,
    },
    /// Show config paths and settings
    Config,
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Plan a date, or every date of a range
    Add {
        from: String,
        to: Option<String>,

        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Plan or unplan a single date
    Toggle {
        date: String,

        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Plan a range, or unplan it when most of it is already planned
    ToggleRange {
        from: String,
        to: String,

        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Remove every planned date of a year
    Clear {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// List the planned dates of a year
    List {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(long)]
        csv: bool,
    },
}

#[derive(Subcommand)]
enum CalendarCommands {
    /// Check a custom calendar file without importing it
    Validate { file: PathBuf },
    /// Add a custom calendar file to the library
    Import {
        file: PathBuf,

        /// Replace a stored calendar with the same id
        #[arg(long)]
        replace: bool,
    },
    /// List stored custom calendars
    List,
    /// Delete a stored custom calendar
    Remove { id: String },
    /// Copy a location's official holidays into a custom calendar
    FromLocation {
        location: String,

        #[arg(short, long)]
        year: Option<i32>,

        /// Store the copy instead of printing it
        #[arg(long)]
        import: bool,
    },
    /// Print a sample calendar document
    Example,
}

/// Explicit `--year`, else the year of the first date given.
fn year_of(year: Option<i32>, date: NaiveDate) -> i32 {
    year.unwrap_or_else(|| date.year())
}

fn data_store() -> Result<Store> {
    Ok(Store::new(HoliplanConfig::load()?.data_path()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Locations { popular } => commands::locations::run(popular),
        Commands::Grid {
            year,
            locations,
            calendars,
            details,
        } => {
            let planner = Planner::load()?;
            let year = year.unwrap_or_else(current_year);
            commands::grid::run(&planner, year, &locations, &calendars, details).await
        }
        Commands::Plan { command } => run_plan(command),
        Commands::Summary {
            year,
            locations,
            calendars,
            csv,
        } => {
            let planner = Planner::load()?;
            let year = year.unwrap_or_else(current_year);
            commands::summary::run(&planner, year, &locations, &calendars, csv).await
        }
        Commands::Colors { ids, theme } => {
            let theme = match theme {
                Some(theme) => theme,
                None => HoliplanConfig::load()?.theme,
            };
            commands::colors::run(&ids, theme)
        }
        Commands::Calendar { command } => run_calendar(command).await,
        Commands::Config => commands::config::run(&HoliplanConfig::load()?),
    }
}

fn run_plan(command: PlanCommands) -> Result<()> {
    let store = data_store()?;

    match command {
        PlanCommands::Add { from, to, year } => {
            let from = parse_date(&from)?;
            let to = to.as_deref().map(parse_date).transpose()?;
            commands::plan::add(&store, year_of(year, from), from, to)
        }
        PlanCommands::Toggle { date, year } => {
            let date = parse_date(&date)?;
            commands::plan::toggle(&store, year_of(year, date), date)
        }
        PlanCommands::ToggleRange { from, to, year } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            commands::plan::toggle_range(&store, year_of(year, from), from, to)
        }
        PlanCommands::Clear { year } => {
            commands::plan::clear(&store, year.unwrap_or_else(current_year))
        }
        PlanCommands::List { year, csv } => {
            commands::plan::list(&store, year.unwrap_or_else(current_year), csv)
        }
    }
}

async fn run_calendar(command: CalendarCommands) -> Result<()> {
    match command {
        CalendarCommands::Validate { file } => commands::calendar::validate(&file),
        CalendarCommands::Import { file, replace } => {
            commands::calendar::import(&data_store()?, &file, replace)
        }
        CalendarCommands::List => commands::calendar::list(&data_store()?),
        CalendarCommands::Remove { id } => commands::calendar::remove(&data_store()?, &id),
        CalendarCommands::FromLocation {
            location,
            year,
            import,
        } => {
            let planner = Planner::load()?;
            let year = year.unwrap_or_else(current_year);
            commands::calendar::from_location(&planner, &location, year, import).await
        }
        CalendarCommands::Example => commands::calendar::example(),
    }
}
