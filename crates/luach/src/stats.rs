//! Statistics over runs of Hebrew years.
//!
//! Everything here is a fold over [`YearRange`]; counts stay integral and any
//! percentage is left to the caller.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::convert::gregorian_from_hebrew;
use crate::dehiyyot::{tishrei1, RulesFired};
use crate::error::Result;
use crate::holiday::{Holiday, HOLIDAYS};
use crate::month::HebrewMonth;
use crate::units::weekday_from_sunday;
use crate::year::MAX_YEAR;

/// Inclusive run of Hebrew years, clamped to `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: start.max(1),
            end: end.min(MAX_YEAR),
        }
    }

    /// The `years` years ending at `end`.
    pub fn ending_at(end: i32, years: u32) -> Self {
        let years = i32::try_from(years).unwrap_or(i32::MAX);
        Self::new(end.saturating_sub(years.saturating_sub(1)), end)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    pub fn len(&self) -> u32 {
        u32::try_from(self.end - self.start + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

// ---------------------------------------------------------------------------
// Weekday histograms
// ---------------------------------------------------------------------------

/// How often a date fell on each weekday. `counts[0]` is Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHistogram {
    pub label: String,
    pub counts: [u32; 7],
}

impl WeekdayHistogram {
    fn new(label: String) -> Self {
        Self {
            label,
            counts: [0; 7],
        }
    }

    fn record(&mut self, weekday: Weekday) {
        self.counts[weekday.num_days_from_sunday() as usize] += 1;
    }

    pub fn count(&self, weekday: Weekday) -> u32 {
        self.counts[weekday.num_days_from_sunday() as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Weekdays with at least one occurrence, Sunday first.
    pub fn weekdays_seen(&self) -> Vec<Weekday> {
        (0..7)
            .filter(|&i| self.counts[i] > 0)
            .map(|i| weekday_from_sunday(i as i64))
            .collect()
    }
}

/// Weekday of `day` `month` in every year of `range`. Years in which the date
/// does not exist (Adar II in a common year, 30 Heshvan in a short year) are
/// skipped.
pub fn weekday_histogram(range: YearRange, month: HebrewMonth, day: u8) -> Result<WeekdayHistogram> {
    let mut histogram = WeekdayHistogram::new(format!("{day} {month}"));
    for year in range.years() {
        match gregorian_from_hebrew(year, month, day) {
            Ok(date) => histogram.record(date.weekday()),
            Err(e) if e.is_invalid_hebrew_date() => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(histogram)
}

/// Weekday of a holiday's first day, following its leap-year month.
pub fn holiday_weekday_histogram(range: YearRange, holiday: &Holiday) -> Result<WeekdayHistogram> {
    let mut histogram = WeekdayHistogram::new(holiday.name.to_string());
    for year in range.years() {
        histogram.record(holiday.first_day(year)?.weekday());
    }
    Ok(histogram)
}

/// Weekday of Rosh Hashanah.
pub fn tishrei1_weekday_histogram(range: YearRange) -> WeekdayHistogram {
    let mut histogram = WeekdayHistogram::new("1 Tishrei".to_string());
    for year in range.years() {
        histogram.record(tishrei1(year).weekday);
    }
    histogram
}

/// Civil date of `day` `month` for each year where it exists.
pub fn hebrew_date_years(
    range: YearRange,
    month: HebrewMonth,
    day: u8,
) -> Result<Vec<(i32, NaiveDate)>> {
    let mut out = Vec::new();
    for year in range.years() {
        match gregorian_from_hebrew(year, month, day) {
            Ok(date) => out.push((year, date)),
            Err(e) if e.is_invalid_hebrew_date() => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Dehiyyot usage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RuleStats {
    /// Years in the range where the rule fired.
    pub count: u32,
    /// Latest year in the range where it fired.
    pub last_used: Option<i32>,
    /// First year after the range (within the lookahead) where it fires.
    pub next_used: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RuleTable {
    #[serde(rename = "A")]
    pub a: RuleStats,
    #[serde(rename = "B")]
    pub b: RuleStats,
    #[serde(rename = "C")]
    pub c: RuleStats,
    #[serde(rename = "D")]
    pub d: RuleStats,
}

impl RuleTable {
    fn slots(&mut self) -> [&mut RuleStats; 4] {
        [&mut self.a, &mut self.b, &mut self.c, &mut self.d]
    }
}

fn flags(rules: &RulesFired) -> [bool; 4] {
    [rules.a, rules.b, rules.c, rules.d]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DehiyyotYear {
    pub year: i32,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub rules: RulesFired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DehiyyotStats {
    pub range: YearRange,
    pub total_years: u32,
    pub rules: RuleTable,
    pub timeline: Vec<DehiyyotYear>,
}

/// How often each postponement rule fired over `range`, when each was last
/// used, and the first use in the `lookahead` years after the range.
pub fn dehiyyot_stats(range: YearRange, lookahead: u32) -> Result<DehiyyotStats> {
    let mut rules = RuleTable::default();
    let mut timeline = Vec::with_capacity(range.len() as usize);

    for year in range.years() {
        let result = tishrei1(year);
        for (slot, fired) in rules.slots().into_iter().zip(flags(&result.rules)) {
            if fired {
                slot.count += 1;
                slot.last_used = Some(year);
            }
        }
        timeline.push(DehiyyotYear {
            year,
            date: result.date()?,
            weekday: result.weekday,
            rules: result.rules,
        });
    }

    let horizon = range.end.saturating_add(i32::try_from(lookahead).unwrap_or(i32::MAX));
    for year in (range.end..horizon).map(|y| y + 1) {
        let fired = flags(&tishrei1(year).rules);
        let mut all_found = true;
        for (slot, fired) in rules.slots().into_iter().zip(fired) {
            if slot.next_used.is_none() && fired {
                slot.next_used = Some(year);
            }
            all_found &= slot.next_used.is_some();
        }
        if all_found {
            break;
        }
    }

    Ok(DehiyyotStats {
        range,
        total_years: range.len(),
        rules,
        timeline,
    })
}

// ---------------------------------------------------------------------------
// Holiday dates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayOccurrence {
    pub year: i32,
    pub date: NaiveDate,
    /// 1-based day of the Gregorian year.
    pub day_of_year: u32,
    pub weekday: Weekday,
}

impl HolidayOccurrence {
    fn new(year: i32, date: NaiveDate) -> Self {
        Self {
            year,
            date,
            day_of_year: date.ordinal(),
            weekday: date.weekday(),
        }
    }
}

/// First day of `holiday` in each year of `range`.
pub fn holiday_date_series(range: YearRange, holiday: &Holiday) -> Result<Vec<HolidayOccurrence>> {
    range
        .years()
        .map(|year| Ok(HolidayOccurrence::new(year, holiday.first_day(year)?)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayExtremes {
    pub name: &'static str,
    /// Start with the earliest Gregorian month and day.
    pub earliest: HolidayOccurrence,
    /// End with the latest Gregorian month and day. An end in the civil year
    /// after the start (Chanukah into January) is later than any December end.
    pub latest: HolidayOccurrence,
}

fn month_day(date: NaiveDate) -> (u32, u32) {
    (date.month(), date.day())
}

/// Orders holiday ends across the turn of the civil year.
fn end_key(first: NaiveDate, last: NaiveDate) -> (i32, u32, u32) {
    (last.year() - first.year(), last.month(), last.day())
}

/// For every holiday, its earliest start and latest end by Gregorian month
/// and day across `range`. Empty for an empty range.
pub fn holiday_extremes(range: YearRange) -> Result<Vec<HolidayExtremes>> {
    if range.is_empty() {
        return Ok(Vec::new());
    }
    HOLIDAYS
        .iter()
        .map(|holiday| {
            let first = holiday.first_day(range.start)?;
            let last = holiday.last_day(range.start)?;
            let mut earliest = HolidayOccurrence::new(range.start, first);
            let mut latest = HolidayOccurrence::new(range.start, last);
            let mut latest_key = end_key(first, last);
            for year in range.years().skip(1) {
                let first = holiday.first_day(year)?;
                if month_day(first) < month_day(earliest.date) {
                    earliest = HolidayOccurrence::new(year, first);
                }
                let last = holiday.last_day(year)?;
                let key = end_key(first, last);
                if key > latest_key {
                    latest = HolidayOccurrence::new(year, last);
                    latest_key = key;
                }
            }
            Ok(HolidayExtremes {
                name: holiday.name,
                earliest,
                latest,
            })
        })
        .collect()
}
