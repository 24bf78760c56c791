//! Property-based tests for calendar arithmetic using proptest.
//!
//! These check invariants that hold for any year or day in the calendar's
//! range, complementing the fixed dates in the other test files.

use chrono::{Datelike, NaiveDate, Weekday};
use luach::{
    absolute_day_from_hebrew, gregorian_from_hebrew, hebrew_from_absolute, hebrew_from_gregorian,
    is_leap, molad_of_tishrei, months, tishrei1, year_length, AbsoluteDay, HebrewDate,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_year() -> impl Strategy<Value = i32> {
    1i32..=9000
}

/// Civil dates from 1000 to 2999.
fn arb_civil_date() -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap();
    (0i64..730_000).prop_map(move |offset| start + chrono::Duration::days(offset))
}

/// A valid Hebrew date: pick a year, a month in it, and a day within it.
fn arb_hebrew_date() -> impl Strategy<Value = HebrewDate> {
    (3000i32..=7000, 0usize..13, 1u8..=30).prop_map(|(year, m, d)| {
        let table = months(year).unwrap();
        let month = table[m % table.len()];
        let day = d.min(month.length);
        HebrewDate::new(year, month.month, day).unwrap()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Tishrei 1 never falls on Sunday, Wednesday or Friday
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn rosh_hashanah_weekday_is_allowed(year in arb_year()) {
        let weekday = tishrei1(year).weekday;
        prop_assert!(
            !matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri),
            "year {} starts on {:?}",
            year,
            weekday
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: At most one of the numeric rules fires
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn numeric_rules_are_exclusive(year in arb_year()) {
        let rules = tishrei1(year).rules;
        let fired = [rules.b, rules.c, rules.d].iter().filter(|f| **f).count();
        prop_assert!(fired <= 1, "year {} fired {}", year, rules.letters());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Molad fields stay in range
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn molad_fields_in_range(year in arb_year()) {
        let molad = molad_of_tishrei(year);
        prop_assert!(molad.hour < 24);
        prop_assert!(molad.chalakim < 1080);
        prop_assert_eq!(molad.weekday, molad.day.weekday());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Month lengths add up to the year length
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn months_sum_to_year_length(year in arb_year()) {
        let table = months(year).unwrap();
        let total: i64 = table.iter().map(|m| i64::from(m.length)).sum();
        prop_assert_eq!(total, year_length(year).unwrap());
        prop_assert_eq!(table.len(), if is_leap(year) { 13 } else { 12 });
    }
}

// ---------------------------------------------------------------------------
// Property 5: Gregorian -> Hebrew -> Gregorian is the identity
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn civil_date_round_trips(date in arb_civil_date()) {
        let hebrew = hebrew_from_gregorian(date).unwrap();
        let back = gregorian_from_hebrew(hebrew.year, hebrew.month, hebrew.day).unwrap();
        prop_assert_eq!(back, date);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Hebrew -> absolute -> Hebrew is the identity
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn hebrew_date_round_trips(date in arb_hebrew_date()) {
        let day = absolute_day_from_hebrew(date.year, date.month, date.day).unwrap();
        prop_assert_eq!(hebrew_from_absolute(day).unwrap(), date);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Consecutive civil days are consecutive Hebrew days
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn next_day_advances_by_one(date in arb_civil_date()) {
        let today = hebrew_from_gregorian(date).unwrap();
        let tomorrow = hebrew_from_absolute(AbsoluteDay::from(date) + 1).unwrap();
        if tomorrow.day == 1 {
            prop_assert!(tomorrow.month != today.month || tomorrow.year != today.year);
        } else {
            prop_assert_eq!(tomorrow.day, today.day + 1);
            prop_assert_eq!(tomorrow.month, today.month);
            prop_assert_eq!(tomorrow.year, today.year);
        }
        prop_assert_eq!(
            tomorrow.weekday().unwrap().num_days_from_sunday(),
            (date.weekday().num_days_from_sunday() + 1) % 7
        );
    }
}
