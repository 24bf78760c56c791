use anyhow::{Context, Result};
use luach::holiday::holidays_in_year;
use luach::YearInfo;

use crate::output;

/// `luach year`: leap flag, length, month table, molad and Rosh Hashanah.
pub fn year(year: i32, json: bool) -> Result<()> {
    let info = YearInfo::new(year)?;
    if json {
        return output::print_json(&info);
    }

    let rosh_hashanah = &info.tishrei1;
    let molad = &rosh_hashanah.molad;
    let rules = rosh_hashanah.rules.letters();

    println!("Hebrew year {}", info.year);
    println!("  leap:       {}", output::yes_no(info.leap));
    println!("  length:     {} days ({:?})", info.length, info.kind);
    println!(
        "  molad:      {} {}h {}p",
        molad.weekday, molad.hour, molad.chalakim
    );
    println!(
        "  tishrei 1:  {} ({}), rules: {}",
        rosh_hashanah.date()?,
        rosh_hashanah.weekday,
        if rules.is_empty() { "none" } else { rules.as_str() }
    );
    println!("  months:");
    for month in &info.months {
        println!("    {:<10} {}", month.month.name(), month.length);
    }
    Ok(())
}

/// `luach holidays`: every holiday of the year with its civil dates.
pub fn holidays(year: i32, json: bool) -> Result<()> {
    let instances = holidays_in_year(year)
        .with_context(|| format!("failed to resolve holidays for {year}"))?;
    if json {
        return output::print_json(&instances);
    }

    for instance in &instances {
        let (Some(first), Some(last)) = (instance.days.first(), instance.days.last()) else {
            continue;
        };
        let hebrew = if first == last {
            format!("{} {}", first.day, first.month)
        } else {
            format!("{} {} - {} {}", first.day, first.month, last.day, last.month)
        };
        let civil = if instance.first == instance.last {
            instance.first.to_string()
        } else {
            format!("{} .. {}", instance.first, instance.last)
        };
        println!("{:<30} {:<22} {}", instance.name, hebrew, civil);
    }
    Ok(())
}
