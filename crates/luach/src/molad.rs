//! Molad (mean conjunction) of Tishrei, in exact chalakim.
//!
//! The molad is found by stepping a whole number of mean lunations away from a
//! fixed epoch whose molad and civil date are known. Each step adds
//! [`Chalakim::LUNATION`]; the total is then split into a day offset from the
//! epoch day and a time within the Hebrew day.
//!
//! Hebrew hours count from 6 PM of the previous civil evening, so hour 18 is
//! civil noon of the day the molad is labelled with.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::units::{weekday_from_sunday, AbsoluteDay, Chalakim};
use crate::year::months_elapsed;

/// A known molad of Tishrei and the civil date of its Hebrew day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch {
    pub year: i32,
    pub weekday: Weekday,
    /// Time of the molad within its Hebrew day.
    pub time: Chalakim,
    /// Civil day that carries the molad's weekday.
    pub day: AbsoluteDay,
}

impl Epoch {
    /// Molad Tishrei 5786: Monday, hour 18, 187 chalakim; Monday 2025-09-22.
    pub const TISHREI_5786: Epoch = Epoch {
        year: 5786,
        weekday: Weekday::Mon,
        time: Chalakim::from_hours_parts(18, 187),
        day: AbsoluteDay(20_353),
    };
}

/// The molad of Tishrei of one Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molad {
    pub weekday: Weekday,
    /// Hebrew hour, `0..=23`.
    pub hour: u8,
    /// Chalakim past the hour, `0..=1079`.
    pub chalakim: u16,
    /// Whole days from the epoch day to the molad's day.
    pub day_offset: i64,
    /// Civil day carrying the molad's weekday.
    pub day: AbsoluteDay,
}

impl Molad {
    /// Time of day as a single chalakim count, `0..25920`.
    pub fn time_of_day(&self) -> Chalakim {
        Chalakim::from_hours_parts(i64::from(self.hour), i64::from(self.chalakim))
    }
}

/// Signed number of months from Tishrei of `Epoch::TISHREI_5786.year` to
/// Tishrei of `year` (12 per common year, 13 per leap year crossed).
pub fn months_from_epoch(year: i32) -> i64 {
    months_elapsed(year) - months_elapsed(Epoch::TISHREI_5786.year)
}

/// Compute the molad of Tishrei for `year`.
pub fn molad_of_tishrei(year: i32) -> Molad {
    let epoch = Epoch::TISHREI_5786;
    let total = epoch.time + Chalakim(months_from_epoch(year) * Chalakim::LUNATION.get());
    let (day_offset, remainder) = total.split_days();
    let weekday = weekday_from_sunday(
        i64::from(epoch.weekday.num_days_from_sunday()) + day_offset,
    );

    Molad {
        weekday,
        // remainder is in 0..25920, so both narrowings are lossless.
        hour: (remainder.get() / Chalakim::PER_HOUR) as u8,
        chalakim: (remainder.get() % Chalakim::PER_HOUR) as u16,
        day_offset,
        day: epoch.day + day_offset,
    }
}
