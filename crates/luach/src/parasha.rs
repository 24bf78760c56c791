//! The annual Torah-reading cycle, scheduled onto Saturdays.
//!
//! A cycle for Hebrew year `Y` runs from the first Saturday after Simchat
//! Torah (23 Tishrei) of `Y` through 23 Tishrei of `Y + 1`. Two anchors split
//! it into segments:
//!
//! - Segment 1: Bereshit .. Masei (43 portions), up to the Saturday before
//!   Shabbat Chazon (the last Saturday on or before 9 Av).
//! - Segment 2: Devarim .. Haazinu (10 portions), from Shabbat Chazon to the
//!   Saturday before the next Simchat Torah.
//!
//! Saturdays that fall on a major festival get a holiday reading instead of a
//! portion. When a segment has fewer free Saturdays than portions, adjacent
//! portions are joined from a fixed priority list until the two match.
//!
//! Cycles are memoized per scheduler. Building one is deterministic, so two
//! callers racing on the same year may both compute it; the first insert wins
//! and both observe identical schedules.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::convert::{absolute_day_from_hebrew, hebrew_from_absolute, HebrewDate};
use crate::error::{CalendarError, Result};
use crate::metadata::{MetadataTable, ParashaInfo, JOIN_SEPARATOR};
use crate::month::HebrewMonth;
use crate::units::AbsoluteDay;

/// The 54 weekly portions in reading order.
pub const PARASHOT: [&str; 54] = [
    "Bereshit", "Noach", "Lech-Lecha", "Vayera", "Chayei Sarah", "Toldot",
    "Vayetzei", "Vayishlach", "Vayeshev", "Miketz", "Vayigash", "Vayechi",
    "Shemot", "Vaera", "Bo", "Beshalach", "Yitro", "Mishpatim",
    "Terumah", "Tetzaveh", "Ki Tisa", "Vayakhel", "Pekudei",
    "Vayikra", "Tzav", "Shemini", "Tazria", "Metzora",
    "Achrei Mot", "Kedoshim", "Emor", "Behar", "Bechukotai",
    "Bamidbar", "Nasso", "Behaalotecha", "Shelach", "Korach",
    "Chukat", "Balak", "Pinchas", "Matot", "Masei",
    "Devarim", "Vaetchanan", "Eikev", "Reeh", "Shoftim",
    "Ki Tetzei", "Ki Tavo", "Nitsavim", "Vayelech", "Haazinu",
    "Vezot Haberakhah",
];

/// Name given to festival Saturdays.
pub const HOLIDAY_READING: &str = "Holiday reading";

const VEZOT_HABERAKHAH: &str = PARASHOT[53];

/// A contiguous run of portions with its allowed joins.
struct Segment {
    number: u8,
    /// Indices into [`PARASHOT`], `first..end`.
    first: usize,
    end: usize,
    /// Joinable pairs as the index of the first portion, relative to `first`,
    /// in the order they are used.
    joins: &'static [usize],
}

const SEGMENT_1: Segment = Segment {
    number: 1,
    first: 0,
    end: 43,
    joins: &[
        41, // Matot + Masei
        26, // Tazria + Metzora
        28, // Achrei Mot + Kedoshim
        31, // Behar + Bechukotai
        21, // Vayakhel + Pekudei
        38, // Chukat + Balak
    ],
};

const SEGMENT_2: Segment = Segment {
    number: 2,
    first: 43,
    end: 53,
    joins: &[
        7, // Nitsavim + Vayelech
    ],
};

/// What is read on one Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingEntry {
    /// Portion name, `"A / B"` for a joined reading, or [`HOLIDAY_READING`].
    pub name: String,
    pub joined: bool,
    pub holiday_override: bool,
    /// Vezot Haberakhah read on a Saturday Simchat Torah at the cycle's end.
    pub is_final_simchat_torah: bool,
}

impl ReadingEntry {
    fn portion(name: String, joined: bool) -> Self {
        Self {
            name,
            joined,
            holiday_override: false,
            is_final_simchat_torah: false,
        }
    }

    fn holiday() -> Self {
        Self {
            name: HOLIDAY_READING.to_string(),
            joined: false,
            holiday_override: true,
            is_final_simchat_torah: false,
        }
    }

    /// True for a weekly portion (single or joined), false for festivals.
    pub fn is_regular(&self) -> bool {
        !self.holiday_override && !self.is_final_simchat_torah
    }
}

/// A reading together with its civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedReading {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub reading: ReadingEntry,
}

/// One annual reading cycle: an entry for every Saturday it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSchedule {
    pub cycle_year: i32,
    entries: BTreeMap<AbsoluteDay, ReadingEntry>,
}

impl CycleSchedule {
    pub fn get(&self, day: AbsoluteDay) -> Option<&ReadingEntry> {
        self.entries.get(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AbsoluteDay, &ReadingEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First Saturday of the cycle and its reading.
    pub fn first(&self) -> Option<(AbsoluteDay, &ReadingEntry)> {
        self.entries.iter().next().map(|(d, e)| (*d, e))
    }

    /// Names of the weekly portions in order, skipping festival Saturdays.
    pub fn regular_readings(&self) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| e.is_regular())
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Every entry with its civil date.
    pub fn dated(&self) -> Result<Vec<DatedReading>> {
        self.entries
            .iter()
            .map(|(day, reading)| {
                Ok(DatedReading {
                    date: day.to_date()?,
                    reading: reading.clone(),
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Anchor dates
// ---------------------------------------------------------------------------

/// 23 Tishrei of `year`.
pub fn simchat_torah(year: i32) -> Result<AbsoluteDay> {
    absolute_day_from_hebrew(year, HebrewMonth::Tishrei, 23)
}

/// First Saturday strictly after Simchat Torah of `year`: where Bereshit is read.
pub fn first_shabbat_after_simchat_torah(year: i32) -> Result<AbsoluteDay> {
    Ok(simchat_torah(year)?.after(Weekday::Sat))
}

/// Last Saturday on or before 9 Av of `year`.
pub fn shabbat_chazon(year: i32) -> Result<AbsoluteDay> {
    Ok(absolute_day_from_hebrew(year, HebrewMonth::Av, 9)?.on_or_before(Weekday::Sat))
}

/// First Saturday strictly after 9 Av of `year`.
pub fn shabbat_nachamu(year: i32) -> Result<AbsoluteDay> {
    Ok(absolute_day_from_hebrew(year, HebrewMonth::Av, 9)?.after(Weekday::Sat))
}

/// True if a Saturday on `date` is displaced by a festival reading: Pesach,
/// Shavuot, Rosh Hashanah, Yom Kippur, or Sukkot through Simchat Torah.
pub fn is_festival_shabbat(date: &HebrewDate) -> bool {
    match date.month {
        HebrewMonth::Nisan => (15..=21).contains(&date.day),
        HebrewMonth::Sivan => date.day == 6,
        HebrewMonth::Tishrei => matches!(date.day, 1 | 2 | 10 | 15..=23),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Cycle construction
// ---------------------------------------------------------------------------

struct Shabbat {
    day: AbsoluteDay,
    festival: bool,
}

/// Saturdays in `[start, end)`, `start` itself being a Saturday.
fn collect_shabbatot(start: AbsoluteDay, end: AbsoluteDay) -> Result<Vec<Shabbat>> {
    let mut list = Vec::new();
    let mut day = start;
    while day < end {
        list.push(Shabbat {
            day,
            festival: is_festival_shabbat(&hebrew_from_absolute(day)?),
        });
        day = day + 7;
    }
    Ok(list)
}

/// The segment's readings after joining enough pairs to fit `available`
/// Saturdays.
fn segment_readings(
    cycle_year: i32,
    segment: &Segment,
    available: usize,
) -> Result<Vec<ReadingEntry>> {
    let portions = &PARASHOT[segment.first..segment.end];
    let surplus = portions.len().saturating_sub(available);
    if surplus > segment.joins.len() {
        return Err(CalendarError::JoinCandidatesExhausted {
            cycle_year,
            segment: segment.number,
            surplus,
            candidates: segment.joins.len(),
        });
    }
    let joins: HashSet<usize> = segment.joins[..surplus].iter().copied().collect();

    let joined_first: Vec<&str> = segment.joins[..surplus].iter().map(|&i| portions[i]).collect();
    debug!(
        cycle_year,
        segment = segment.number,
        available,
        surplus,
        joins = ?joined_first,
        "segment fitted"
    );

    let mut readings = Vec::with_capacity(portions.len() - surplus);
    let mut i = 0;
    while i < portions.len() {
        if joins.contains(&i) && i + 1 < portions.len() {
            let name = format!("{}{JOIN_SEPARATOR}{}", portions[i], portions[i + 1]);
            readings.push(ReadingEntry::portion(name, true));
            i += 2;
        } else {
            readings.push(ReadingEntry::portion(portions[i].to_string(), false));
            i += 1;
        }
    }
    Ok(readings)
}

/// Place readings on the non-festival Saturdays in order.
fn assign(
    entries: &mut BTreeMap<AbsoluteDay, ReadingEntry>,
    shabbatot: &[Shabbat],
    readings: Vec<ReadingEntry>,
) {
    let mut readings = readings.into_iter();
    for shabbat in shabbatot {
        if shabbat.festival {
            entries.insert(shabbat.day, ReadingEntry::holiday());
        } else if let Some(reading) = readings.next() {
            entries.insert(shabbat.day, reading);
        }
    }
}

/// Build the reading cycle that starts after Simchat Torah of `cycle_year`.
///
/// # Errors
/// [`CalendarError::JoinCandidatesExhausted`] if a segment would need more
/// joins than it has candidates; date errors for years outside the calendar.
pub fn compute_cycle(cycle_year: i32) -> Result<CycleSchedule> {
    let bereshit = first_shabbat_after_simchat_torah(cycle_year)?;
    let chazon = shabbat_chazon(cycle_year)?;
    let next_year = cycle_year
        .checked_add(1)
        .ok_or(CalendarError::YearOutOfRange { year: cycle_year })?;
    let next_simchat_torah = simchat_torah(next_year)?;

    let mut entries = BTreeMap::new();
    for (segment, start, end) in [
        (&SEGMENT_1, bereshit, chazon),
        (&SEGMENT_2, chazon, next_simchat_torah),
    ] {
        let shabbatot = collect_shabbatot(start, end)?;
        let available = shabbatot.iter().filter(|s| !s.festival).count();
        let readings = segment_readings(cycle_year, segment, available)?;
        assign(&mut entries, &shabbatot, readings);
    }

    if next_simchat_torah.weekday() == Weekday::Sat {
        entries.insert(
            next_simchat_torah,
            ReadingEntry {
                name: VEZOT_HABERAKHAH.to_string(),
                joined: false,
                holiday_override: false,
                is_final_simchat_torah: true,
            },
        );
    }

    Ok(CycleSchedule {
        cycle_year,
        entries,
    })
}

/// Cycle that owns the Saturday `day`: on or before Simchat Torah of its
/// Hebrew year it belongs to the previous year's cycle, after it to this one.
pub fn cycle_year_for(day: AbsoluteDay) -> Result<i32> {
    let year = hebrew_from_absolute(day)?.year;
    if day > simchat_torah(year)? {
        Ok(year)
    } else {
        Ok(year - 1)
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Memoizing front end for reading-cycle queries.
///
/// Owns the per-year cycle cache and the optional portion metadata table.
#[derive(Debug, Default)]
pub struct ParashaScheduler {
    cache: Mutex<HashMap<i32, Arc<CycleSchedule>>>,
    metadata: OnceLock<MetadataTable>,
}

impl ParashaScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cycle starting after Simchat Torah of `cycle_year`, computed on
    /// first use.
    pub fn cycle(&self, cycle_year: i32) -> Result<Arc<CycleSchedule>> {
        if let Some(cached) = self.lock_cache().get(&cycle_year) {
            trace!(cycle_year, "cycle cache hit");
            return Ok(Arc::clone(cached));
        }

        // Computed without holding the lock; a racing caller may do the same.
        let schedule = Arc::new(compute_cycle(cycle_year)?);
        debug!(cycle_year, saturdays = schedule.len(), "cycle computed");

        let mut cache = self.lock_cache();
        Ok(Arc::clone(cache.entry(cycle_year).or_insert(schedule)))
    }

    /// Reading for a civil date; `None` unless it is a Saturday in a cycle.
    pub fn parasha_for_date(&self, date: NaiveDate) -> Result<Option<ReadingEntry>> {
        self.parasha_for_day(AbsoluteDay::from(date))
    }

    /// Reading for a Hebrew date; `None` unless it is a Saturday in a cycle.
    pub fn parasha_for_hebrew_date(&self, date: &HebrewDate) -> Result<Option<ReadingEntry>> {
        let day = absolute_day_from_hebrew(date.year, date.month, date.day)?;
        self.parasha_for_day(day)
    }

    pub fn parasha_for_day(&self, day: AbsoluteDay) -> Result<Option<ReadingEntry>> {
        if day.weekday() != Weekday::Sat {
            return Ok(None);
        }
        let cycle = self.cycle(cycle_year_for(day)?)?;
        Ok(cycle.get(day).cloned())
    }

    /// Cycle years currently memoized, ascending.
    pub fn cached_cycles(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.lock_cache().keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Install the portion metadata table. Only the first install takes
    /// effect; returns whether this one did.
    pub fn install_metadata(&self, table: MetadataTable) -> bool {
        let entries = table.len();
        match self.metadata.set(table) {
            Ok(()) => {
                debug!(entries, "parasha metadata installed");
                true
            }
            Err(_) => {
                warn!("parasha metadata already installed; ignoring replacement");
                false
            }
        }
    }

    /// The metadata table, if the host has supplied one.
    pub fn metadata(&self) -> Option<&MetadataTable> {
        self.metadata.get()
    }

    /// Metadata for the portions of `entry`. Empty when metadata has not been
    /// loaded, for holiday readings, and for unknown names.
    pub fn details_for(&self, entry: &ReadingEntry) -> Vec<&ParashaInfo> {
        if entry.holiday_override {
            return Vec::new();
        }
        self.metadata()
            .map(|table| table.details_for(&entry.name))
            .unwrap_or_default()
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<i32, Arc<CycleSchedule>>> {
        // Entries are inserted whole, so a poisoned map is still consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined_names(readings: &[ReadingEntry]) -> Vec<&str> {
        readings
            .iter()
            .filter(|r| r.joined)
            .map(|r| r.name.as_str())
            .collect()
    }

    #[test]
    fn segment_one_uses_every_join_when_needed() {
        let readings = segment_readings(5786, &SEGMENT_1, 37).unwrap();
        assert_eq!(readings.len(), 37);
        assert_eq!(
            joined_names(&readings),
            vec![
                "Vayakhel / Pekudei",
                "Tazria / Metzora",
                "Achrei Mot / Kedoshim",
                "Behar / Bechukotai",
                "Chukat / Balak",
                "Matot / Masei",
            ]
        );
    }

    #[test]
    fn segment_one_joins_in_priority_order() {
        let readings = segment_readings(5786, &SEGMENT_1, 41).unwrap();
        assert_eq!(readings.len(), 41);
        assert_eq!(joined_names(&readings), vec!["Tazria / Metzora", "Matot / Masei"]);
    }

    #[test]
    fn no_joins_when_saturdays_suffice() {
        let readings = segment_readings(5786, &SEGMENT_1, 43).unwrap();
        assert_eq!(readings.len(), 43);
        assert!(joined_names(&readings).is_empty());
    }

    #[test]
    fn segment_one_surplus_past_candidates_fails() {
        let err = segment_readings(5786, &SEGMENT_1, 36).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::JoinCandidatesExhausted {
                cycle_year: 5786,
                segment: 1,
                surplus: 7,
                candidates: 6,
            }
        ));
    }

    #[test]
    fn segment_two_has_a_single_join() {
        let readings = segment_readings(5786, &SEGMENT_2, 9).unwrap();
        assert_eq!(joined_names(&readings), vec!["Nitsavim / Vayelech"]);

        let err = segment_readings(5786, &SEGMENT_2, 8).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::JoinCandidatesExhausted {
                segment: 2,
                surplus: 2,
                candidates: 1,
                ..
            }
        ));
    }

    #[test]
    fn cycles_at_the_last_years_fail_cleanly() {
        assert!(matches!(
            compute_cycle(i32::MAX),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            compute_cycle(crate::year::MAX_YEAR),
            Err(CalendarError::YearOutOfRange { .. })
        ));
    }
}
