//! Hebrew <-> Gregorian date conversion.
//!
//! Both directions go through [`AbsoluteDay`]. A Hebrew date maps to Tishrei 1
//! of its year plus the lengths of the months before it; a civil date is
//! placed in a Hebrew year by walking a first guess until the day falls in
//! `[tishrei1(y), tishrei1(y + 1))`, then located by scanning the month table.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::dehiyyot::tishrei1_absolute;
use crate::error::{CalendarError, Result};
use crate::month::HebrewMonth;
use crate::units::AbsoluteDay;
use crate::year::months;

/// First guess for the Hebrew year of a civil date. January of Gregorian year
/// `g` lies in Hebrew year `g + 3760`; Tishrei of `g` starts `g + 3761`.
const HEBREW_YEAR_OFFSET: i32 = 3760;

/// The year walk converges in one step for every year the calendar can
/// represent; anything beyond this means the boundaries are inconsistent.
const MAX_YEAR_STEPS: u32 = 4;

/// A validated date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HebrewDate {
    pub year: i32,
    pub month: HebrewMonth,
    pub day: u8,
}

impl HebrewDate {
    /// Build a Hebrew date, checking that the month exists in `year` and the
    /// day is within it.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self> {
        let length = months(year)?
            .into_iter()
            .find(|m| m.month == month)
            .map(|m| m.length)
            .ok_or(CalendarError::MonthNotInYear { year, month })?;
        if day == 0 || day > length {
            return Err(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                max_day: length,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn to_absolute(&self) -> Result<AbsoluteDay> {
        absolute_day_from_hebrew(self.year, self.month, self.day)
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        gregorian_from_hebrew(self.year, self.month, self.day)
    }

    pub fn weekday(&self) -> Result<Weekday> {
        Ok(self.to_absolute()?.weekday())
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

// ---------------------------------------------------------------------------
// Hebrew -> absolute / Gregorian
// ---------------------------------------------------------------------------

/// Absolute day of `day` `month` `year`.
///
/// # Errors
/// - [`CalendarError::MonthNotInYear`] if the month is absent in that year.
/// - [`CalendarError::DayOutOfRange`] if the day is past the month's end.
/// - [`CalendarError::YearOutOfRange`] outside `1..=MAX_YEAR`.
pub fn absolute_day_from_hebrew(year: i32, month: HebrewMonth, day: u8) -> Result<AbsoluteDay> {
    let mut offset: i64 = 0;
    for m in months(year)? {
        if m.month == month {
            if day == 0 || day > m.length {
                return Err(CalendarError::DayOutOfRange {
                    year,
                    month,
                    day,
                    max_day: m.length,
                });
            }
            return Ok(tishrei1_absolute(year) + offset + i64::from(day - 1));
        }
        offset += i64::from(m.length);
    }
    Err(CalendarError::MonthNotInYear { year, month })
}

/// Civil date of a Hebrew date. Use `Datelike::weekday()` on the result for
/// its day of the week.
pub fn gregorian_from_hebrew(year: i32, month: HebrewMonth, day: u8) -> Result<NaiveDate> {
    absolute_day_from_hebrew(year, month, day)?.to_date()
}

// ---------------------------------------------------------------------------
// Absolute / Gregorian -> Hebrew
// ---------------------------------------------------------------------------

/// Hebrew year containing `day`, and how many single-year steps the walk from
/// the first guess took.
pub(crate) fn locate_year(day: AbsoluteDay) -> Result<(i32, u32)> {
    let mut year = day.to_date()?.year() + HEBREW_YEAR_OFFSET;
    let mut steps = 0;

    loop {
        if day >= tishrei1_absolute(year + 1) {
            year += 1;
        } else if day < tishrei1_absolute(year) {
            year -= 1;
        } else {
            break;
        }
        steps += 1;
        if steps > MAX_YEAR_STEPS {
            return Err(CalendarError::DateOutOfRange(format!(
                "Hebrew year search did not converge for day {}",
                day.get()
            )));
        }
    }

    if year < 1 {
        return Err(CalendarError::DateOutOfRange(format!(
            "day {} is before Tishrei 1 of year 1",
            day.get()
        )));
    }
    Ok((year, steps))
}

/// Hebrew date of an absolute day.
pub fn hebrew_from_absolute(day: AbsoluteDay) -> Result<HebrewDate> {
    let (year, _) = locate_year(day)?;
    let mut day_of_year = day - tishrei1_absolute(year);

    for m in months(year)? {
        let length = i64::from(m.length);
        if day_of_year < length {
            return Ok(HebrewDate {
                year,
                month: m.month,
                // day_of_year < 30 here.
                day: (day_of_year + 1) as u8,
            });
        }
        day_of_year -= length;
    }

    Err(CalendarError::DateOutOfRange(format!(
        "day {} is past the end of Hebrew year {year}",
        day.get()
    )))
}

/// Hebrew date of a civil date.
pub fn hebrew_from_gregorian(date: NaiveDate) -> Result<HebrewDate> {
    hebrew_from_absolute(AbsoluteDay::from(date))
}

/// Hebrew date of a civil date given as raw numbers (`month` is 1..=12).
///
/// # Errors
/// [`CalendarError::InvalidGregorianDate`] if the numbers are not a date.
pub fn hebrew_from_ymd(year: i32, month: u32, day: u32) -> Result<HebrewDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidGregorianDate { year, month, day })?;
    hebrew_from_gregorian(date)
}
