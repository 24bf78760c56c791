use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use luach::{hebrew_from_gregorian, HebrewDate, HebrewMonth};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct Conversion {
    gregorian: NaiveDate,
    hebrew: HebrewDate,
    weekday: Weekday,
}

pub fn to_hebrew(date: NaiveDate, json: bool) -> Result<()> {
    let hebrew = hebrew_from_gregorian(date)
        .with_context(|| format!("failed to convert {date} to a Hebrew date"))?;
    let conversion = Conversion {
        gregorian: date,
        hebrew,
        weekday: date.weekday(),
    };

    if json {
        return output::print_json(&conversion);
    }
    println!("{} ({})", conversion.hebrew, conversion.weekday);
    Ok(())
}

pub fn to_gregorian(year: i32, month: &str, day: u8, json: bool) -> Result<()> {
    let month: HebrewMonth = month.parse()?;
    let hebrew = HebrewDate::new(year, month, day)?;
    let gregorian = hebrew.to_gregorian()?;
    let conversion = Conversion {
        gregorian,
        hebrew,
        weekday: gregorian.weekday(),
    };

    if json {
        return output::print_json(&conversion);
    }
    println!("{} ({})", conversion.gregorian, conversion.weekday);
    Ok(())
}
