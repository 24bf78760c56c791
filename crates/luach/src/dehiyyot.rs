//! The four postponement rules (dehiyyot) that fix the date of Tishrei 1.
//!
//! Rules B, C and D each postpone by one day and are tried in that order; the
//! first that applies wins and the rest are not consulted. Rule A (lo ADU)
//! then moves the result off Sunday, Wednesday and Friday.
//!
//! | Rule | Name | Condition |
//! |------|------|-----------|
//! | B | Molad Zaken | molad at or after noon (hour 18) |
//! | C | BeTU'TeKPaT | Monday, >= 15h 589p, previous year leap |
//! | D | GaTRaD | Tuesday, >= 9h 204p, current year common |
//! | A | Lo ADU | result falls on Sunday, Wednesday or Friday |

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::molad::{molad_of_tishrei, Molad};
use crate::units::{AbsoluteDay, Chalakim};
use crate::year::{is_leap, leap_position};

/// Noon: 18 Hebrew hours.
pub const MOLAD_ZAKEN: Chalakim = Chalakim::from_hours_parts(18, 0);
/// 15 hours 589 chalakim.
pub const BETUTEKPAT: Chalakim = Chalakim::from_hours_parts(15, 589);
/// 9 hours 204 chalakim.
pub const GATRAD: Chalakim = Chalakim::from_hours_parts(9, 204);

/// Which numeric postponement (rule B, C or D) fired, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Postponement {
    #[default]
    None,
    MoladZaken,
    Betutekpat,
    Gatrad,
}

/// Flags for the rules that fired, keyed by their traditional letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RulesFired {
    #[serde(rename = "A")]
    pub a: bool,
    #[serde(rename = "B")]
    pub b: bool,
    #[serde(rename = "C")]
    pub c: bool,
    #[serde(rename = "D")]
    pub d: bool,
}

impl RulesFired {
    /// Letters of the rules that fired, e.g. `"AB"`; empty if none did.
    pub fn letters(&self) -> String {
        [(self.a, 'A'), (self.b, 'B'), (self.c, 'C'), (self.d, 'D')]
            .iter()
            .filter(|(fired, _)| *fired)
            .map(|(_, letter)| *letter)
            .collect()
    }
}

/// Tishrei 1 of a year together with the rules that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DehiyyotResult {
    pub year: i32,
    pub day: AbsoluteDay,
    /// Civil date of `day`; `None` only past the proleptic Gregorian range.
    #[serde(rename = "date")]
    pub gregorian_date: Option<NaiveDate>,
    pub weekday: Weekday,
    pub molad: Molad,
    pub postponement: Postponement,
    /// Extra days added by lo ADU.
    pub lo_adu_days: u8,
    pub rules: RulesFired,
}

impl DehiyyotResult {
    /// Civil date of Tishrei 1.
    pub fn date(&self) -> Result<NaiveDate> {
        self.day.to_date()
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// What the numeric rules look at.
struct MoladFacts {
    weekday: Weekday,
    time: Chalakim,
    year_is_leap: bool,
    previous_is_leap: bool,
}

fn molad_zaken(f: &MoladFacts) -> bool {
    f.time >= MOLAD_ZAKEN
}

fn betutekpat(f: &MoladFacts) -> bool {
    f.weekday == Weekday::Mon && f.previous_is_leap && f.time >= BETUTEKPAT
}

fn gatrad(f: &MoladFacts) -> bool {
    f.weekday == Weekday::Tue && !f.year_is_leap && f.time >= GATRAD
}

/// Numeric rules in priority order. First match wins.
const NUMERIC_RULES: [(fn(&MoladFacts) -> bool, Postponement); 3] = [
    (molad_zaken, Postponement::MoladZaken),
    (betutekpat, Postponement::Betutekpat),
    (gatrad, Postponement::Gatrad),
];

fn is_adu(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri)
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve Tishrei 1 of `year`, recording which rules fired.
pub fn tishrei1(year: i32) -> DehiyyotResult {
    let molad = molad_of_tishrei(year);
    let facts = MoladFacts {
        weekday: molad.weekday,
        time: molad.time_of_day(),
        year_is_leap: is_leap(year),
        previous_is_leap: leap_position(i64::from(year) - 1),
    };

    let postponement = NUMERIC_RULES
        .iter()
        .find(|(applies, _)| applies(&facts))
        .map_or(Postponement::None, |(_, tag)| *tag);

    let mut day = molad.day;
    if postponement != Postponement::None {
        day = day + 1;
    }

    // Sunday, Wednesday and Friday are never adjacent, so this runs at most once.
    let mut lo_adu_days = 0u8;
    while is_adu(day.weekday()) {
        day = day + 1;
        lo_adu_days += 1;
    }

    DehiyyotResult {
        year,
        day,
        gregorian_date: day.to_date().ok(),
        weekday: day.weekday(),
        molad,
        postponement,
        lo_adu_days,
        rules: RulesFired {
            a: lo_adu_days > 0,
            b: postponement == Postponement::MoladZaken,
            c: postponement == Postponement::Betutekpat,
            d: postponement == Postponement::Gatrad,
        },
    }
}

/// Absolute day of Tishrei 1 of `year`.
pub fn tishrei1_absolute(year: i32) -> AbsoluteDay {
    tishrei1(year).day
}
