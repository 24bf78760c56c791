use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use luach::parasha::DatedReading;
use luach::{
    hebrew_from_gregorian, HebrewDate, MetadataTable, ParashaInfo, ParashaScheduler, ReadingEntry,
};
use serde::Serialize;
use tracing::info;

use crate::cli::ParashaArgs;
use crate::config::LuachConfig;
use crate::output;

#[derive(Serialize)]
struct ParashaReport<'a> {
    date: NaiveDate,
    hebrew: HebrewDate,
    reading: Option<&'a ReadingEntry>,
    details: Vec<&'a ParashaInfo>,
}

#[derive(Serialize)]
struct CycleReport {
    cycle_year: i32,
    readings: Vec<DatedReading>,
}

fn load_metadata(scheduler: &ParashaScheduler, path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parasha metadata: {}", path.display()))?;
    let table = MetadataTable::from_json(&json)
        .with_context(|| format!("failed to parse parasha metadata: {}", path.display()))?;
    info!(path = %path.display(), entries = table.len(), "loaded parasha metadata");
    scheduler.install_metadata(table);
    Ok(())
}

/// `luach parasha`: the reading for one Saturday.
pub fn parasha(args: ParashaArgs, config: &LuachConfig, json: bool) -> Result<()> {
    let scheduler = ParashaScheduler::new();
    if let Some(path) = args.metadata.as_deref().or(config.parasha.metadata.as_deref()) {
        load_metadata(&scheduler, path)?;
    }

    let date = args.date;
    let hebrew = hebrew_from_gregorian(date)?;
    let reading = scheduler
        .parasha_for_date(date)
        .with_context(|| format!("failed to schedule readings around {date}"))?;
    let details = reading
        .as_ref()
        .map(|entry| scheduler.details_for(entry))
        .unwrap_or_default();

    if json {
        return output::print_json(&ParashaReport {
            date,
            hebrew,
            reading: reading.as_ref(),
            details,
        });
    }

    let Some(entry) = reading else {
        if date.weekday() == Weekday::Sat {
            println!("{date} ({hebrew}): no reading");
        } else {
            println!("{date} ({hebrew}) is a {}, not a Saturday", date.weekday());
        }
        return Ok(());
    };

    println!("{date} ({hebrew}): {}", entry.name);
    for portion in details {
        println!("  {}", portion.name);
        if !portion.book.is_empty() {
            println!("    book:     {}", portion.book);
        }
        if !portion.torah.is_empty() {
            println!("    torah:    {}", portion.torah);
        }
        if !portion.haftarah.is_empty() {
            println!("    haftarah: {}", portion.haftarah);
        }
        if let Some(psukim) = portion.psukim {
            println!("    psukim:   {psukim}");
        }
        if let Some(url) = &portion.url {
            println!("    url:      {url}");
        }
    }
    Ok(())
}

/// `luach cycle`: every Saturday of one reading cycle.
pub fn cycle(year: i32, json: bool) -> Result<()> {
    let scheduler = ParashaScheduler::new();
    let schedule = scheduler
        .cycle(year)
        .with_context(|| format!("failed to build the reading cycle for {year}"))?;
    let readings = schedule.dated()?;

    if json {
        return output::print_json(&CycleReport {
            cycle_year: schedule.cycle_year,
            readings,
        });
    }

    for dated in &readings {
        let marker = if dated.reading.is_regular() { "" } else { "  *" };
        println!("{}  {}{marker}", dated.date, dated.reading.name);
    }
    Ok(())
}
