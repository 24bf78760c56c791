//! Error types for calendar computations.

use thiserror::Error;

use crate::month::HebrewMonth;
use crate::year::MAX_YEAR;

/// Errors that can occur while converting dates or building a reading cycle.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// The month does not exist in this year (e.g. Adar II in a common year).
    #[error("{month} does not exist in Hebrew year {year}")]
    MonthNotInYear { year: i32, month: HebrewMonth },

    /// The day is outside `1..=max_day` for the month in this year.
    #[error("day {day} is out of range for {month} {year} (1..={max_day})")]
    DayOutOfRange {
        year: i32,
        month: HebrewMonth,
        day: u8,
        max_day: u8,
    },

    /// Hebrew years run from 1 to [`MAX_YEAR`].
    #[error("Hebrew year {year} is out of range (must be in 1..={max})", max = MAX_YEAR)]
    YearOutOfRange { year: i32 },

    /// A day count could not be mapped onto the calendar.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// Year/month/day do not form a proleptic Gregorian date.
    #[error("invalid Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    #[error("unknown Hebrew month: {0}")]
    UnknownMonth(String),

    #[error("unknown holiday: {0}")]
    UnknownHoliday(String),

    /// More portions must be joined than the segment has candidate pairs for.
    #[error(
        "reading cycle {cycle_year}: segment {segment} needs {surplus} joined readings \
         but only {candidates} join candidates exist"
    )]
    JoinCandidatesExhausted {
        cycle_year: i32,
        segment: u8,
        surplus: usize,
        candidates: usize,
    },

    /// The parasha metadata document is not valid JSON for [`crate::ParashaInfo`].
    #[error("metadata parse error: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl CalendarError {
    /// True for the errors that reject a `(year, month, day)` triple as a
    /// Hebrew date: a month missing from that year or a day past its end.
    pub fn is_invalid_hebrew_date(&self) -> bool {
        matches!(
            self,
            CalendarError::MonthNotInYear { .. } | CalendarError::DayOutOfRange { .. }
        )
    }
}

/// Convenience alias used throughout luach.
pub type Result<T> = std::result::Result<T, CalendarError>;
