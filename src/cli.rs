use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

/// Bore calendar generator.
#[derive(Parser)]
#[command(
    name = "bore",
    version,
    about = "Maps Gregorian dates onto the bore calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the calendar for one year and write it as JSON.
    Generate(GenerateArgs),
    /// Show the calendar entry in effect at a civil date and time.
    Lookup(LookupArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file. Built-in defaults are used when the
    /// default file is absent.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Write to this file instead of `{bore_year}.json`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for `{bore_year}.json`.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Arguments for the `lookup` subcommand.
#[derive(clap::Args)]
pub struct LookupArgs {
    /// Calendar JSON written by `generate`.
    #[arg(short, long)]
    pub calendar: PathBuf,

    /// Civil date and time, e.g. `2025-04-13T19:30` (default: now).
    #[arg(long, value_parser = parse_civil)]
    pub at: Option<NaiveDateTime>,

    /// Hour from which the evening belongs to the next calendar day.
    #[arg(long, default_value_t = bore_calendar::DEFAULT_SUNSET_HOUR,
          value_parser = clap::value_parser!(u32).range(0..=24))]
    pub sunset_hour: u32,
}

fn parse_civil(s: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(12, 0, 0))
        })
        .ok_or_else(|| format!("expected YYYY-MM-DD[THH:MM[:SS]], got {s:?}"))
}
