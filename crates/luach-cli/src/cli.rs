use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Hebrew calendar conversions, holidays and weekly Torah readings.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar conversions, holidays and weekly Torah readings"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./luach.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as pretty JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to its Hebrew date.
    ToHebrew {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,
    },
    /// Convert a Hebrew date to its Gregorian date.
    ToGregorian {
        year: i32,
        /// Month name, e.g. Tishrei, Heshvan, "Adar II".
        month: String,
        day: u8,
    },
    /// Show the structure of a Hebrew year.
    Year {
        year: i32,
    },
    /// List the holidays of a Hebrew year.
    Holidays {
        year: i32,
    },
    /// Show the Torah reading for a Saturday.
    Parasha(ParashaArgs),
    /// Show the full reading cycle that starts after Simchat Torah of YEAR.
    Cycle {
        year: i32,
    },
    /// Statistics over a run of Hebrew years.
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct ParashaArgs {
    /// Date as YYYY-MM-DD.
    pub date: NaiveDate,

    /// Override the portion metadata file from config.
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Override the last year of the window from config.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Override the window length from config.
    #[arg(long)]
    pub years: Option<u32>,

    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Weekday distribution of a Hebrew date.
    Weekdays {
        month: String,
        day: u8,
    },
    /// How often each postponement rule fired.
    Dehiyyot {
        /// Override how many years past the window to search for next use.
        #[arg(long)]
        lookahead: Option<u32>,
    },
    /// Gregorian date of a holiday in each year.
    Series {
        holiday: String,
    },
    /// Earliest and latest Gregorian dates of every holiday.
    Extremes,
}
