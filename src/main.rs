mod app;
mod commands;
mod data;
mod render;
mod utils;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dongnae_core::constants::DATE_FORMAT;
use dongnae_core::filter::FilterState;
use dongnae_core::month::Month;

#[derive(Parser)]
#[command(name = "dongnae")]
#[command(about = "Browse neighborhood program schedules and the organization directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month calendar grid
    Calendar {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Only show programs from this organization
        #[arg(long)]
        org: Option<String>,

        /// Only show programs in this district
        #[arg(long)]
        district: Option<String>,

        /// Only show favorited programs
        #[arg(short, long)]
        favorites: bool,
    },
    /// Show the programs on one date
    Day {
        /// Date to show (YYYY-MM-DD)
        date: String,

        /// Only show programs from this organization
        #[arg(long)]
        org: Option<String>,

        /// Only show programs in this district
        #[arg(long)]
        district: Option<String>,

        /// Only show favorited programs
        #[arg(short, long)]
        favorites: bool,

        /// Open the Nth program's participation (or map) link in the browser
        #[arg(long)]
        open: Option<usize>,
    },
    /// Browse the calendar interactively
    Browse {
        /// Month to start on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Search the organization directory
    Orgs {
        /// Free-text query (matches type, name, district, tags, address)
        query: Option<String>,
    },
    /// Inspect or toggle favorites
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Point the data directory somewhere else
    SetDataDir { path: String },
}

#[derive(Subcommand)]
enum FavAction {
    /// List favorited programs
    List,
    /// Flip a favorite by id
    Toggle { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calendar {
            month,
            org,
            district,
            favorites,
        } => {
            let month = resolve_month(month.as_deref())?;
            commands::calendar::run(month, filter_state(org, district, favorites)).await
        }
        Commands::Day {
            date,
            org,
            district,
            favorites,
            open,
        } => {
            let date = parse_date(&date)?;
            commands::day::run(date, filter_state(org, district, favorites), open).await
        }
        Commands::Browse { month } => {
            let month = resolve_month(month.as_deref())?;
            commands::browse::run(month).await
        }
        Commands::Orgs { query } => commands::orgs::run(query.as_deref().unwrap_or("")).await,
        Commands::Fav { action } => match action {
            FavAction::List => commands::fav::list().await,
            FavAction::Toggle { id } => commands::fav::toggle(&id),
        },
        Commands::Config { action } => match action {
            Some(ConfigAction::SetDataDir { path }) => commands::config::set_data_dir(&path),
            None => commands::config::show(),
        },
    }
}

fn resolve_month(arg: Option<&str>) -> Result<Month> {
    match arg {
        Some(s) => {
            Month::parse(s).ok_or_else(|| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
        }
        None => Ok(Month::current()),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

fn filter_state(org: Option<String>, district: Option<String>, favorites: bool) -> FilterState {
    FilterState {
        org,
        district,
        favorites_only: favorites,
    }
}
