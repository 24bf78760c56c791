//! `luach` CLI: Hebrew calendar conversion, holidays, Torah readings and
//! calendar statistics from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Gregorian -> Hebrew
//! luach to-hebrew 2026-03-03
//!
//! # Hebrew -> Gregorian
//! luach to-gregorian 5784 "Adar II" 14
//!
//! # Year structure and Rosh Hashanah postponements
//! luach year 5786
//!
//! # Reading for a Saturday, with portion metadata
//! luach parasha 2026-03-14 --metadata data/parashot.json
//!
//! # How often each postponement rule fired in the last 2000 years
//! luach stats dehiyyot --json
//! ```

mod cli;
mod config;
mod convert_cmd;
mod logging;
mod output;
mod parasha_cmd;
mod stats_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LuachConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LuachConfig::load(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Command::ToHebrew { date } => convert_cmd::to_hebrew(date, json),
        Command::ToGregorian { year, month, day } => {
            convert_cmd::to_gregorian(year, &month, day, json)
        }
        Command::Year { year } => year_cmd::year(year, json),
        Command::Holidays { year } => year_cmd::holidays(year, json),
        Command::Parasha(args) => parasha_cmd::parasha(args, &config, json),
        Command::Cycle { year } => parasha_cmd::cycle(year, json),
        Command::Stats(args) => stats_cmd::run(args, &config.stats, json),
    }
}
