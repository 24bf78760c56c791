//! # luach
//!
//! Hebrew calendar arithmetic in exact integers.
//!
//! The molad of Tishrei is computed in chalakim (1/1080 hour) from a fixed
//! epoch, the four postponement rules fix the civil date of Rosh Hashanah,
//! and year lengths, month tables, date conversion, holidays and the annual
//! Torah-reading schedule all follow from that one date per year.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use luach::{hebrew_from_gregorian, gregorian_from_hebrew, HebrewMonth, ParashaScheduler};
//!
//! let rosh_hashanah = gregorian_from_hebrew(5786, HebrewMonth::Tishrei, 1).unwrap();
//! assert_eq!(rosh_hashanah, NaiveDate::from_ymd_opt(2025, 9, 23).unwrap());
//!
//! let date = hebrew_from_gregorian(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()).unwrap();
//! assert_eq!(date.to_string(), "14 Adar 5786");
//!
//! let scheduler = ParashaScheduler::new();
//! let reading = scheduler
//!     .parasha_for_date(NaiveDate::from_ymd_opt(2025, 10, 18).unwrap())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(reading.name, "Bereshit");
//! ```
//!
//! ## Modules
//!
//! - [`units`]: `Chalakim` and `AbsoluteDay` primitives
//! - [`molad`]: molad of Tishrei from the 5786 epoch
//! - [`dehiyyot`]: postponement rules and Tishrei 1
//! - [`year`]: leap years, year lengths, month tables
//! - [`month`]: `HebrewMonth` names and parsing
//! - [`convert`]: Hebrew <-> Gregorian conversion
//! - [`holiday`]: holiday table resolved per year
//! - [`parasha`]: annual Torah-reading schedule
//! - [`metadata`]: host-supplied portion metadata
//! - [`stats`]: weekday and rule statistics over year ranges
//! - [`error`]: error types

pub mod convert;
pub mod dehiyyot;
pub mod error;
pub mod holiday;
pub mod metadata;
pub mod molad;
pub mod month;
pub mod parasha;
pub mod stats;
pub mod units;
pub mod year;

pub use convert::{
    absolute_day_from_hebrew, gregorian_from_hebrew, hebrew_from_absolute,
    hebrew_from_gregorian, hebrew_from_ymd, HebrewDate,
};
pub use dehiyyot::{tishrei1, tishrei1_absolute, DehiyyotResult, Postponement, RulesFired};
pub use error::CalendarError;
pub use holiday::{
    days_in_year, holiday, holidays_in_year, is_day_in_holiday, month_for_year, Holiday,
    HolidayDay, HolidaySpan, HOLIDAYS,
};
pub use metadata::{MetadataTable, ParashaInfo};
pub use molad::{molad_of_tishrei, Epoch, Molad};
pub use month::HebrewMonth;
pub use parasha::{CycleSchedule, ParashaScheduler, ReadingEntry};
pub use units::{AbsoluteDay, Chalakim};
pub use year::{
    check_year, is_leap, month_length, months, year_length, Month, YearInfo, YearKind, MAX_YEAR,
};
