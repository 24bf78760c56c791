//! Leap years, year lengths and the month table of a Hebrew year.

use serde::{Deserialize, Serialize};

use crate::dehiyyot::{tishrei1, tishrei1_absolute, DehiyyotResult};
use crate::error::{CalendarError, Result};
use crate::month::HebrewMonth;

/// Positions of the leap years within the 19-year cycle.
const LEAP_POSITIONS: [i64; 7] = [3, 6, 8, 11, 14, 17, 19];

/// Last year whose length is defined: its successor's Tishrei 1 must exist.
pub const MAX_YEAR: i32 = i32::MAX - 1;

/// True if `year` has thirteen months.
pub fn is_leap(year: i32) -> bool {
    leap_position(i64::from(year))
}

pub(crate) fn leap_position(year: i64) -> bool {
    let position = (year - 1).rem_euclid(19) + 1;
    LEAP_POSITIONS.contains(&position)
}

/// Reject years outside `1..=MAX_YEAR`.
///
/// # Errors
/// [`CalendarError::YearOutOfRange`].
pub fn check_year(year: i32) -> Result<()> {
    if !(1..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(())
}

/// Months from the start of year 1 to Tishrei of `year`.
///
/// Closed form of summing 12 per common and 13 per leap year over the
/// 19-year cycle.
pub fn months_elapsed(year: i32) -> i64 {
    (235 * i64::from(year) - 234).div_euclid(19)
}

/// Number of days in `year`: one of 353, 354, 355, 383, 384, 385.
pub fn year_length(year: i32) -> Result<i64> {
    check_year(year)?;
    Ok(tishrei1_absolute(year + 1) - tishrei1_absolute(year))
}

/// How Heshvan and Kislev are sized in a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearKind {
    /// 353 or 383 days: Heshvan 29, Kislev 29.
    Deficient,
    /// 354 or 384 days: Heshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: Heshvan 30, Kislev 30.
    Complete,
}

impl YearKind {
    /// Classify a year by its length. Lengths outside the six legal values
    /// fall back to `Regular`.
    pub fn from_length(length: i64) -> Self {
        match length {
            353 | 383 => YearKind::Deficient,
            355 | 385 => YearKind::Complete,
            _ => YearKind::Regular,
        }
    }

    fn heshvan_kislev(self) -> (u8, u8) {
        match self {
            YearKind::Deficient => (29, 29),
            YearKind::Regular => (29, 30),
            YearKind::Complete => (30, 30),
        }
    }
}

/// One month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    pub month: HebrewMonth,
    pub length: u8,
}

/// Ordered month table of `year`: 12 months, or 13 in a leap year.
pub fn months(year: i32) -> Result<Vec<Month>> {
    let leap = is_leap(year);
    let (heshvan, kislev) = YearKind::from_length(year_length(year)?).heshvan_kislev();

    let mut table = vec![
        Month { month: HebrewMonth::Tishrei, length: 30 },
        Month { month: HebrewMonth::Heshvan, length: heshvan },
        Month { month: HebrewMonth::Kislev, length: kislev },
        Month { month: HebrewMonth::Tevet, length: 29 },
        Month { month: HebrewMonth::Shevat, length: 30 },
        Month { month: HebrewMonth::Adar, length: if leap { 30 } else { 29 } },
        Month { month: HebrewMonth::Nisan, length: 30 },
        Month { month: HebrewMonth::Iyar, length: 29 },
        Month { month: HebrewMonth::Sivan, length: 30 },
        Month { month: HebrewMonth::Tammuz, length: 29 },
        Month { month: HebrewMonth::Av, length: 30 },
        Month { month: HebrewMonth::Elul, length: 29 },
    ];
    if leap {
        table.insert(6, Month { month: HebrewMonth::AdarII, length: 29 });
    }
    Ok(table)
}

/// Length of `month` in `year`.
///
/// # Errors
/// [`CalendarError::MonthNotInYear`] for Adar II in a common year,
/// [`CalendarError::YearOutOfRange`] outside `1..=MAX_YEAR`.
pub fn month_length(year: i32, month: HebrewMonth) -> Result<u8> {
    months(year)?
        .into_iter()
        .find(|m| m.month == month)
        .map(|m| m.length)
        .ok_or(CalendarError::MonthNotInYear { year, month })
}

/// Everything about one year in a single value, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearInfo {
    pub year: i32,
    pub leap: bool,
    pub length: i64,
    pub kind: YearKind,
    pub months: Vec<Month>,
    pub tishrei1: DehiyyotResult,
}

impl YearInfo {
    pub fn new(year: i32) -> Result<Self> {
        let length = year_length(year)?;
        Ok(Self {
            year,
            leap: is_leap(year),
            length,
            kind: YearKind::from_length(length),
            months: months(year)?,
            tishrei1: tishrei1(year),
        })
    }
}
