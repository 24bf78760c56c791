//! Tests for leap years, year lengths and month tables.

use luach::{
    absolute_day_from_hebrew, is_leap, month_length, months, tishrei1, year_length, CalendarError,
    HebrewDate, HebrewMonth, YearInfo, YearKind, MAX_YEAR,
};

fn lengths(year: i32) -> Vec<(HebrewMonth, u8)> {
    months(year).unwrap().into_iter().map(|m| (m.month, m.length)).collect()
}

// ---------------------------------------------------------------------------
// Leap years
// ---------------------------------------------------------------------------

#[test]
fn leap_positions_in_the_cycle() {
    // 5776 is position 19 of its cycle; 5777 starts a new one.
    let leaps: Vec<i32> = (5777..5796).filter(|&y| is_leap(y)).collect();
    assert_eq!(leaps, vec![5779, 5782, 5784, 5787, 5790, 5793, 5795]);
}

#[test]
fn seven_leap_years_in_every_cycle() {
    for cycle_start in (1..6000).step_by(19) {
        let count = (cycle_start..cycle_start + 19).filter(|&y| is_leap(y)).count();
        assert_eq!(count, 7, "cycle starting {cycle_start}");
    }
}

// ---------------------------------------------------------------------------
// Year lengths
// ---------------------------------------------------------------------------

#[test]
fn known_year_lengths() {
    assert_eq!(year_length(5784).unwrap(), 383);
    assert_eq!(year_length(5785).unwrap(), 355);
    assert_eq!(year_length(5786).unwrap(), 354);
    assert_eq!(year_length(5787).unwrap(), 385);
    assert_eq!(year_length(5788).unwrap(), 355);
}

#[test]
fn year_length_is_one_of_six_values() {
    let mut seen = std::collections::BTreeSet::new();
    for year in 1..7000 {
        let length = year_length(year).unwrap();
        let legal: &[i64] = if is_leap(year) { &[383, 384, 385] } else { &[353, 354, 355] };
        assert!(legal.contains(&length), "year {year} has {length} days");
        seen.insert(length);
    }
    assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![353, 354, 355, 383, 384, 385]);
}

#[test]
fn year_kind_from_length() {
    assert_eq!(YearKind::from_length(353), YearKind::Deficient);
    assert_eq!(YearKind::from_length(383), YearKind::Deficient);
    assert_eq!(YearKind::from_length(354), YearKind::Regular);
    assert_eq!(YearKind::from_length(384), YearKind::Regular);
    assert_eq!(YearKind::from_length(355), YearKind::Complete);
    assert_eq!(YearKind::from_length(385), YearKind::Complete);
}

// ---------------------------------------------------------------------------
// Month tables
// ---------------------------------------------------------------------------

#[test]
fn common_regular_year_5786() {
    use HebrewMonth::*;
    assert_eq!(
        lengths(5786),
        vec![
            (Tishrei, 30),
            (Heshvan, 29),
            (Kislev, 30),
            (Tevet, 29),
            (Shevat, 30),
            (Adar, 29),
            (Nisan, 30),
            (Iyar, 29),
            (Sivan, 30),
            (Tammuz, 29),
            (Av, 30),
            (Elul, 29),
        ]
    );
}

#[test]
fn leap_deficient_year_5784() {
    let table = lengths(5784);
    assert_eq!(table.len(), 13);
    assert_eq!(table[1], (HebrewMonth::Heshvan, 29));
    assert_eq!(table[2], (HebrewMonth::Kislev, 29));
    assert_eq!(table[5], (HebrewMonth::Adar, 30));
    assert_eq!(table[6], (HebrewMonth::AdarII, 29));
    assert_eq!(table[7], (HebrewMonth::Nisan, 30));
}

#[test]
fn complete_years_have_long_heshvan() {
    for year in [5785, 5787] {
        assert_eq!(month_length(year, HebrewMonth::Heshvan).unwrap(), 30);
        assert_eq!(month_length(year, HebrewMonth::Kislev).unwrap(), 30);
    }
}

#[test]
fn month_lengths_sum_to_year_length() {
    for year in 5000..6000 {
        let total: i64 = months(year).unwrap().iter().map(|m| i64::from(m.length)).sum();
        assert_eq!(total, year_length(year).unwrap(), "year {year}");
    }
}

#[test]
fn adar_ii_missing_in_common_year() {
    let err = month_length(5786, HebrewMonth::AdarII).unwrap_err();
    assert!(matches!(err, CalendarError::MonthNotInYear { year: 5786, .. }));
    assert_eq!(err.to_string(), "Adar II does not exist in Hebrew year 5786");
    assert!(err.is_invalid_hebrew_date());
}

// ---------------------------------------------------------------------------
// Year bounds
// ---------------------------------------------------------------------------

#[test]
fn years_outside_the_calendar_are_rejected() {
    for year in [0, -5, i32::MIN, i32::MAX] {
        assert!(
            matches!(year_length(year), Err(CalendarError::YearOutOfRange { year: y }) if y == year),
            "year {year}"
        );
        assert!(matches!(months(year), Err(CalendarError::YearOutOfRange { .. })));
        assert!(matches!(YearInfo::new(year), Err(CalendarError::YearOutOfRange { .. })));
        assert!(matches!(
            absolute_day_from_hebrew(year, HebrewMonth::Tishrei, 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            HebrewDate::new(year, HebrewMonth::Tishrei, 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
    }
}

#[test]
fn last_year_has_a_legal_length() {
    let length = year_length(MAX_YEAR).unwrap();
    let legal: &[i64] = if is_leap(MAX_YEAR) { &[383, 384, 385] } else { &[353, 354, 355] };
    assert!(legal.contains(&length), "year {MAX_YEAR} has {length} days");
}

#[test]
fn tishrei1_of_extreme_years_has_no_civil_date() {
    for year in [i32::MIN, -1_000_000_000, MAX_YEAR, i32::MAX] {
        let result = tishrei1(year);
        assert_eq!(result.year, year);
        assert_eq!(result.gregorian_date, None, "year {year}");
        assert!(result.date().is_err());
    }
}

// ---------------------------------------------------------------------------
// YearInfo
// ---------------------------------------------------------------------------

#[test]
fn year_info_collects_everything() {
    let info = YearInfo::new(5787).unwrap();
    assert_eq!(info.year, 5787);
    assert!(info.leap);
    assert_eq!(info.length, 385);
    assert_eq!(info.kind, YearKind::Complete);
    assert_eq!(info.months.len(), 13);
    assert_eq!(info.tishrei1.date().unwrap().to_string(), "2026-09-12");
}

#[test]
fn year_info_serializes_month_names() {
    let json = serde_json::to_value(YearInfo::new(5784).unwrap()).unwrap();
    assert_eq!(json["leap"], true);
    assert_eq!(json["tishrei1"]["date"], "2023-09-16");
    assert_eq!(json["kind"], "Deficient");
    assert_eq!(json["months"][6]["month"], "Adar II");
    assert_eq!(json["months"][6]["length"], 29);
}

// ---------------------------------------------------------------------------
// Month names
// ---------------------------------------------------------------------------

#[test]
fn month_parsing_accepts_transliterations() {
    let cases = [
        ("Tishrei", HebrewMonth::Tishrei),
        ("cheshvan", HebrewMonth::Heshvan),
        ("Marcheshvan", HebrewMonth::Heshvan),
        ("TEVET", HebrewMonth::Tevet),
        ("Adar I", HebrewMonth::Adar),
        ("Adar II", HebrewMonth::AdarII),
        ("adar-2", HebrewMonth::AdarII),
        ("Nissan", HebrewMonth::Nisan),
        (" av ", HebrewMonth::Av),
    ];
    for (input, expected) in cases {
        assert_eq!(input.parse::<HebrewMonth>().unwrap(), expected, "{input:?}");
    }
}

#[test]
fn unknown_month_is_rejected() {
    let err = "Smarch".parse::<HebrewMonth>().unwrap_err();
    assert!(matches!(err, CalendarError::UnknownMonth(ref s) if s == "Smarch"));
}

#[test]
fn display_round_trips_through_parse() {
    for month in HebrewMonth::ALL {
        assert_eq!(month.to_string().parse::<HebrewMonth>().unwrap(), month);
    }
}
