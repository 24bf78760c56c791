use anyhow::{Context, Result};
use chrono::Weekday;
use luach::stats::{
    dehiyyot_stats, holiday_date_series, holiday_extremes, weekday_histogram, RuleStats, YearRange,
};
use luach::{holiday, HebrewMonth};
use tracing::info;

use crate::cli::{StatsArgs, StatsCommand};
use crate::config::StatsToml;
use crate::output;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Run a `luach stats` subcommand over the configured window.
pub fn run(args: StatsArgs, config: &StatsToml, json: bool) -> Result<()> {
    let end_year = args.end_year.unwrap_or(config.end_year);
    let years = args.years.unwrap_or(config.years);
    let range = YearRange::ending_at(end_year, years);
    info!(start = range.start, end = range.end, "stats window");

    match args.command {
        StatsCommand::Weekdays { month, day } => weekdays(range, &month, day, json),
        StatsCommand::Dehiyyot { lookahead } => {
            dehiyyot(range, lookahead.unwrap_or(config.lookahead), json)
        }
        StatsCommand::Series { holiday } => series(range, &holiday, json),
        StatsCommand::Extremes => extremes(range, json),
    }
}

fn weekdays(range: YearRange, month: &str, day: u8, json: bool) -> Result<()> {
    let month: HebrewMonth = month.parse()?;
    let histogram = weekday_histogram(range, month, day)?;
    if json {
        return output::print_json(&histogram);
    }

    let total = histogram.total();
    println!(
        "{} in {}..={} ({} years with the date)",
        histogram.label, range.start, range.end, total
    );
    for weekday in WEEKDAYS {
        let count = histogram.count(weekday);
        println!("  {weekday}  {count:>6}  {:>6}", output::percent(count, total));
    }
    Ok(())
}

fn dehiyyot(range: YearRange, lookahead: u32, json: bool) -> Result<()> {
    let stats = dehiyyot_stats(range, lookahead)?;
    if json {
        return output::print_json(&stats);
    }

    let year = |y: Option<i32>| y.map_or_else(|| "-".to_string(), |y| y.to_string());
    println!(
        "Postponements in {}..={} ({} years, next use within {lookahead})",
        range.start, range.end, stats.total_years
    );
    println!("  rule  {:>6}  {:>6}  {:>6}  {:>6}", "count", "share", "last", "next");
    let rows: [(&str, &RuleStats); 4] = [
        ("A", &stats.rules.a),
        ("B", &stats.rules.b),
        ("C", &stats.rules.c),
        ("D", &stats.rules.d),
    ];
    for (letter, rule) in rows {
        println!(
            "  {letter:<4}  {:>6}  {:>6}  {:>6}  {:>6}",
            rule.count,
            output::percent(rule.count, stats.total_years),
            year(rule.last_used),
            year(rule.next_used)
        );
    }
    Ok(())
}

fn series(range: YearRange, name: &str, json: bool) -> Result<()> {
    let holiday = holiday(name)?;
    let occurrences = holiday_date_series(range, holiday).with_context(|| {
        format!("failed to date {} in {}..={}", holiday.name, range.start, range.end)
    })?;
    if json {
        return output::print_json(&occurrences);
    }

    for occurrence in &occurrences {
        println!(
            "{:>5}  {}  {}  day {:>3}",
            occurrence.year, occurrence.date, occurrence.weekday, occurrence.day_of_year
        );
    }
    Ok(())
}

fn extremes(range: YearRange, json: bool) -> Result<()> {
    let extremes = holiday_extremes(range)?;
    if json {
        return output::print_json(&extremes);
    }

    for e in &extremes {
        println!(
            "{:<30} earliest {} ({})  latest {} ({})",
            e.name, e.earliest.date, e.earliest.year, e.latest.date, e.latest.year
        );
    }
    Ok(())
}
