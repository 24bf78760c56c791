//! Static holiday table, resolved per year.
//!
//! A holiday is either a run of days inside one month (`EndDay`) or a fixed
//! number of days that may cross into the next month (`Length`, e.g. Chanukah
//! from 25 Kislev, which ends on 2 or 3 Tevet depending on Kislev's length).
//! Holidays in Adar carry a leap-year override so that in leap years they fall
//! in Adar II.

use chrono::NaiveDate;
use serde::Serialize;

use crate::convert::{absolute_day_from_hebrew, hebrew_from_absolute, HebrewDate};
use crate::error::{CalendarError, Result};
use crate::month::HebrewMonth;
use crate::year::is_leap;

/// How far a holiday extends from its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HolidaySpan {
    /// Last day, in the same month as the first.
    EndDay(u8),
    /// Number of consecutive days; may run into the following month.
    Length(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub name: &'static str,
    pub month: HebrewMonth,
    /// Month used instead of `month` in leap years.
    pub leap_month: Option<HebrewMonth>,
    pub start_day: u8,
    pub span: HolidaySpan,
}

/// A `(month, day)` pair of one holiday day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayDay {
    pub month: HebrewMonth,
    pub day: u8,
}

const fn single(name: &'static str, month: HebrewMonth, day: u8) -> Holiday {
    Holiday {
        name,
        month,
        leap_month: None,
        start_day: day,
        span: HolidaySpan::EndDay(day),
    }
}

const fn range(name: &'static str, month: HebrewMonth, start: u8, end: u8) -> Holiday {
    Holiday {
        name,
        month,
        leap_month: None,
        start_day: start,
        span: HolidaySpan::EndDay(end),
    }
}

const fn adar(name: &'static str, day: u8) -> Holiday {
    Holiday {
        name,
        month: HebrewMonth::Adar,
        leap_month: Some(HebrewMonth::AdarII),
        start_day: day,
        span: HolidaySpan::EndDay(day),
    }
}

pub const HOLIDAYS: &[Holiday] = &[
    range("Pesach", HebrewMonth::Nisan, 15, 21),
    single("Shavuot", HebrewMonth::Sivan, 6),
    range("Rosh Hashanah", HebrewMonth::Tishrei, 1, 2),
    single("Yom Kippur", HebrewMonth::Tishrei, 10),
    range("Sukkot", HebrewMonth::Tishrei, 15, 21),
    single("Shemini Atzeret/Simchat Torah", HebrewMonth::Tishrei, 22),
    Holiday {
        name: "Chanukah",
        month: HebrewMonth::Kislev,
        leap_month: None,
        start_day: 25,
        span: HolidaySpan::Length(8),
    },
    single("Tu Bishvat", HebrewMonth::Shevat, 15),
    // 30 days before 15 Nisan in every year.
    adar("Purim", 14),
    adar("Shushan Purim", 15),
    single("Pesach Sheni", HebrewMonth::Iyar, 14),
    single("Lag BaOmer", HebrewMonth::Iyar, 18),
    single("Tisha B'Av", HebrewMonth::Av, 9),
    single("Tu B'Av", HebrewMonth::Av, 15),
];

/// Look a holiday up by name (case-insensitive).
pub fn holiday(name: &str) -> Result<&'static Holiday> {
    HOLIDAYS
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CalendarError::UnknownHoliday(name.to_string()))
}

impl Holiday {
    /// Month the holiday starts in during `year`.
    pub fn month_for_year(&self, year: i32) -> HebrewMonth {
        match self.leap_month {
            Some(leap_month) if is_leap(year) => leap_month,
            _ => self.month,
        }
    }

    /// Every day of the holiday in `year`.
    pub fn days_in_year(&self, year: i32) -> Result<Vec<HolidayDay>> {
        let month = self.month_for_year(year);
        match self.span {
            HolidaySpan::EndDay(end_day) => Ok((self.start_day..=end_day)
                .map(|day| HolidayDay { month, day })
                .collect()),
            HolidaySpan::Length(length) => {
                let start = absolute_day_from_hebrew(year, month, self.start_day)?;
                (0..i64::from(length))
                    .map(|i| {
                        let date = hebrew_from_absolute(start + i)?;
                        Ok(HolidayDay {
                            month: date.month,
                            day: date.day,
                        })
                    })
                    .collect()
            }
        }
    }

    /// True if `day` `month` of `year` is one of the holiday's days.
    pub fn contains(&self, year: i32, month: HebrewMonth, day: u8) -> Result<bool> {
        Ok(self
            .days_in_year(year)?
            .iter()
            .any(|d| d.month == month && d.day == day))
    }

    /// Civil date of the first day in `year`.
    pub fn first_day(&self, year: i32) -> Result<NaiveDate> {
        absolute_day_from_hebrew(year, self.month_for_year(year), self.start_day)?.to_date()
    }

    /// Civil date of the last day in `year`.
    pub fn last_day(&self, year: i32) -> Result<NaiveDate> {
        let start = absolute_day_from_hebrew(year, self.month_for_year(year), self.start_day)?;
        let days = match self.span {
            HolidaySpan::EndDay(end_day) => i64::from(end_day - self.start_day),
            HolidaySpan::Length(length) => i64::from(length) - 1,
        };
        (start + days).to_date()
    }
}

/// Month `holiday` starts in during `year`.
pub fn month_for_year(holiday: &Holiday, year: i32) -> HebrewMonth {
    holiday.month_for_year(year)
}

/// Every day of `holiday` in `year`.
pub fn days_in_year(year: i32, holiday: &Holiday) -> Result<Vec<HolidayDay>> {
    holiday.days_in_year(year)
}

/// True if `day` `month` of `year` falls on `holiday`.
pub fn is_day_in_holiday(year: i32, month: HebrewMonth, day: u8, holiday: &Holiday) -> Result<bool> {
    holiday.contains(year, month, day)
}

/// One holiday resolved onto a specific year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayInstance {
    pub name: &'static str,
    pub days: Vec<HebrewDate>,
    pub first: NaiveDate,
    pub last: NaiveDate,
}

/// Every holiday of `year`, in table order.
pub fn holidays_in_year(year: i32) -> Result<Vec<HolidayInstance>> {
    HOLIDAYS
        .iter()
        .map(|h| {
            let days = h
                .days_in_year(year)?
                .into_iter()
                .map(|d| HebrewDate {
                    year,
                    month: d.month,
                    day: d.day,
                })
                .collect();
            Ok(HolidayInstance {
                name: h.name,
                days,
                first: h.first_day(year)?,
                last: h.last_day(year)?,
            })
        })
        .collect()
}

/// Holidays that include `date`.
pub fn holidays_on(date: &HebrewDate) -> Result<Vec<&'static Holiday>> {
    let mut found = Vec::new();
    for h in HOLIDAYS {
        if h.contains(date.year, date.month, date.day)? {
            found.push(h);
        }
    }
    Ok(found)
}
