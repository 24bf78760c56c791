//! Integer time and day units.
//!
//! All calendar arithmetic is done in whole chalakim (1/1080 hour) and whole
//! days. Nothing in this crate touches floating point.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// A duration or instant measured in chalakim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chalakim(pub i64);

impl Chalakim {
    pub const PER_HOUR: i64 = 1080;
    pub const PER_DAY: i64 = 24 * Self::PER_HOUR;

    /// Mean lunation: 29 days, 12 hours, 793 chalakim.
    pub const LUNATION: Chalakim = Chalakim(29 * Self::PER_DAY + 12 * Self::PER_HOUR + 793);

    /// Build a time-of-day from a Hebrew hour and a chalakim remainder.
    pub const fn from_hours_parts(hours: i64, parts: i64) -> Self {
        Chalakim(hours * Self::PER_HOUR + parts)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Split into whole days and the remainder within the day.
    ///
    /// Uses floor division, so a negative total lands on the earlier day with
    /// a remainder in `0..PER_DAY`.
    pub const fn split_days(self) -> (i64, Chalakim) {
        (
            self.0.div_euclid(Self::PER_DAY),
            Chalakim(self.0.rem_euclid(Self::PER_DAY)),
        )
    }
}

impl Add for Chalakim {
    type Output = Chalakim;

    fn add(self, rhs: Chalakim) -> Chalakim {
        Chalakim(self.0 + rhs.0)
    }
}

impl fmt::Display for Chalakim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}p", self.0 / Self::PER_HOUR, self.0 % Self::PER_HOUR)
    }
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbsoluteDay(pub i64);

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

impl AbsoluteDay {
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of the week. 1970-01-01 was a Thursday.
    pub fn weekday(self) -> Weekday {
        weekday_from_sunday((self.0 + 4).rem_euclid(7))
    }

    /// Civil date of this day.
    ///
    /// # Errors
    /// Returns [`CalendarError::DateOutOfRange`] outside chrono's supported years.
    pub fn to_date(self) -> Result<NaiveDate> {
        i32::try_from(self.0 + UNIX_EPOCH_DAYS_FROM_CE)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| {
                CalendarError::DateOutOfRange(format!("day {} has no Gregorian date", self.0))
            })
    }

    /// First day on or after `self` that falls on `weekday`.
    pub fn on_or_after(self, weekday: Weekday) -> AbsoluteDay {
        let ahead = (weekday_number(weekday) - weekday_number(self.weekday())).rem_euclid(7);
        self + ahead
    }

    /// Last day on or before `self` that falls on `weekday`.
    pub fn on_or_before(self, weekday: Weekday) -> AbsoluteDay {
        let back = (weekday_number(self.weekday()) - weekday_number(weekday)).rem_euclid(7);
        self - back
    }

    /// First day strictly after `self` that falls on `weekday`.
    pub fn after(self, weekday: Weekday) -> AbsoluteDay {
        (self + 1).on_or_after(weekday)
    }
}

impl From<NaiveDate> for AbsoluteDay {
    fn from(date: NaiveDate) -> Self {
        AbsoluteDay(i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl Add<i64> for AbsoluteDay {
    type Output = AbsoluteDay;

    fn add(self, days: i64) -> AbsoluteDay {
        AbsoluteDay(self.0 + days)
    }
}

impl Sub<i64> for AbsoluteDay {
    type Output = AbsoluteDay;

    fn sub(self, days: i64) -> AbsoluteDay {
        AbsoluteDay(self.0 - days)
    }
}

impl Sub for AbsoluteDay {
    type Output = i64;

    fn sub(self, rhs: AbsoluteDay) -> i64 {
        self.0 - rhs.0
    }
}

/// Weekday for a 0-based count starting at Sunday (the Hebrew "first day").
///
/// `n` is reduced modulo 7.
pub fn weekday_from_sunday(n: i64) -> Weekday {
    match n.rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

fn weekday_number(weekday: Weekday) -> i64 {
    i64::from(weekday.num_days_from_sunday())
}
