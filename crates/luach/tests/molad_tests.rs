//! Tests for the molad of Tishrei.
//!
//! Expected values are the traditional molad tables: year 1 is BaHaRaD
//! (Monday, 5 hours, 204 chalakim) and the epoch year 5786 is Monday,
//! 18 hours, 187 chalakim.

use chrono::{NaiveDate, Weekday};
use luach::molad::months_from_epoch;
use luach::{is_leap, molad_of_tishrei, AbsoluteDay, Chalakim, Epoch};

fn day(y: i32, m: u32, d: u32) -> AbsoluteDay {
    AbsoluteDay::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

#[test]
fn lunation_is_29d_12h_793p() {
    assert_eq!(Chalakim::LUNATION.get(), 765_433);
    assert_eq!(Chalakim::PER_DAY, 25_920);
}

#[test]
fn epoch_constants() {
    let epoch = Epoch::TISHREI_5786;
    assert_eq!(epoch.year, 5786);
    assert_eq!(epoch.weekday, Weekday::Mon);
    assert_eq!(epoch.time.get(), 19_627);
    assert_eq!(epoch.day, day(2025, 9, 22));
    assert_eq!(epoch.day.weekday(), Weekday::Mon);
}

// ---------------------------------------------------------------------------
// Known molads
// ---------------------------------------------------------------------------

#[test]
fn molad_of_epoch_year_is_the_epoch() {
    let m = molad_of_tishrei(5786);
    assert_eq!(m.weekday, Weekday::Mon);
    assert_eq!(m.hour, 18);
    assert_eq!(m.chalakim, 187);
    assert_eq!(m.day_offset, 0);
    assert_eq!(m.day, day(2025, 9, 22));
}

#[test]
fn molad_of_year_one_is_baharad() {
    let m = molad_of_tishrei(1);
    assert_eq!(m.weekday, Weekday::Mon);
    assert_eq!(m.hour, 5);
    assert_eq!(m.chalakim, 204);
}

#[test]
fn molads_around_the_epoch() {
    // (year, weekday, hour, chalakim, civil day of the molad)
    let cases = [
        (5784, Weekday::Fri, 11, 882, day(2023, 9, 15)),
        (5785, Weekday::Thu, 9, 391, day(2024, 10, 3)),
        (5787, Weekday::Sat, 2, 1063, day(2026, 9, 12)),
        (5800, Weekday::Sun, 13, 216, day(2039, 9, 18)),
    ];
    for (year, weekday, hour, chalakim, civil) in cases {
        let m = molad_of_tishrei(year);
        assert_eq!(
            (m.weekday, m.hour, m.chalakim, m.day),
            (weekday, hour, chalakim, civil),
            "molad of {year}"
        );
    }
}

#[test]
fn molad_weekday_matches_its_civil_day() {
    for year in 5000..5900 {
        let m = molad_of_tishrei(year);
        assert_eq!(m.weekday, m.day.weekday(), "year {year}");
    }
}

#[test]
fn negative_offsets_use_floor_division() {
    // 5785 is 12 lunations before the epoch, so its molad lands on an
    // earlier day with a non-negative time of day.
    let m = molad_of_tishrei(5785);
    assert_eq!(m.day_offset, -354);
    assert!(m.time_of_day().get() >= 0);
}

// ---------------------------------------------------------------------------
// Month counting
// ---------------------------------------------------------------------------

#[test]
fn months_from_epoch_matches_year_by_year_sum() {
    let epoch = Epoch::TISHREI_5786.year;
    for year in 4500..7000 {
        let expected: i64 = if year >= epoch {
            (epoch..year).map(|y| if is_leap(y) { 13 } else { 12 }).sum()
        } else {
            -(year..epoch).map(|y| if is_leap(y) { 13 } else { 12 }).sum::<i64>()
        };
        assert_eq!(months_from_epoch(year), expected, "year {year}");
    }
}

#[test]
fn consecutive_molads_differ_by_whole_lunations() {
    for year in 5700..5800 {
        let a = molad_of_tishrei(year);
        let b = molad_of_tishrei(year + 1);
        let months = if is_leap(year) { 13 } else { 12 };
        let gap = (b.day - a.day) * Chalakim::PER_DAY + b.time_of_day().get()
            - a.time_of_day().get();
        assert_eq!(gap, months * Chalakim::LUNATION.get(), "year {year}");
    }
}
