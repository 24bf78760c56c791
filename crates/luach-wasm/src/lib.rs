//! WASM bindings for luach.
//!
//! Exposes date conversion, year structure, holidays and the weekly reading
//! schedule to JavaScript via `wasm-bindgen`. Dates cross the boundary as
//! `YYYY-MM-DD` strings and every result is returned as a JSON string.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p luach-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/luach-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/luach_wasm.wasm
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use luach::{HebrewDate, HebrewMonth, MetadataTable, ParashaInfo, ParashaScheduler, ReadingEntry};
use serde::Serialize;
use wasm_bindgen::prelude::*;

thread_local! {
    /// One scheduler per JS realm, so cycles stay cached between calls.
    static SCHEDULER: ParashaScheduler = ParashaScheduler::new();
}

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HebrewDateDto {
    year: i32,
    month: HebrewMonth,
    day: u8,
    weekday: Weekday,
    display: String,
}

impl HebrewDateDto {
    fn new(date: HebrewDate, weekday: Weekday) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            weekday,
            display: date.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GregorianDateDto {
    date: String,
    weekday: Weekday,
}

#[derive(Serialize)]
struct ParashaDto<'a> {
    date: String,
    #[serde(flatten)]
    reading: &'a ReadingEntry,
    details: Vec<&'a ParashaInfo>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn to_js_err(e: luach::CalendarError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Convert a Gregorian `YYYY-MM-DD` date to its Hebrew date.
///
/// Returns `{year, month, day, weekday, display}`.
#[wasm_bindgen(js_name = "hebrewFromGregorian")]
pub fn hebrew_from_gregorian(iso: &str) -> Result<String, JsValue> {
    let date = parse_date(iso)?;
    let hebrew = luach::hebrew_from_gregorian(date).map_err(to_js_err)?;
    to_json(&HebrewDateDto::new(hebrew, date.weekday()))
}

/// Convert a Hebrew date to its Gregorian date.
///
/// `month` accepts the usual transliterations ("Heshvan", "Cheshvan",
/// "Adar II", ...). Returns `{date, weekday}`.
#[wasm_bindgen(js_name = "gregorianFromHebrew")]
pub fn gregorian_from_hebrew(year: i32, month: &str, day: u8) -> Result<String, JsValue> {
    let month: HebrewMonth = month.parse().map_err(to_js_err)?;
    let date = luach::gregorian_from_hebrew(year, month, day).map_err(to_js_err)?;
    to_json(&GregorianDateDto {
        date: date.to_string(),
        weekday: date.weekday(),
    })
}

/// Leap flag, length, kind, month table and Rosh Hashanah of a Hebrew year.
#[wasm_bindgen(js_name = "yearInfo")]
pub fn year_info(year: i32) -> Result<String, JsValue> {
    let info = luach::YearInfo::new(year).map_err(to_js_err)?;
    to_json(&info)
}

/// Molad of Tishrei: `{weekday, hour, chalakim, day_offset, day}`.
#[wasm_bindgen(js_name = "moladOfTishrei")]
pub fn molad_of_tishrei(year: i32) -> Result<String, JsValue> {
    to_json(&luach::molad_of_tishrei(year))
}

/// Rosh Hashanah of `year` with the postponement rules that fired.
#[wasm_bindgen(js_name = "tishrei1")]
pub fn tishrei1(year: i32) -> Result<String, JsValue> {
    to_json(&luach::tishrei1(year))
}

/// Every holiday of `year` with its Hebrew days and civil first/last dates.
#[wasm_bindgen(js_name = "holidaysInYear")]
pub fn holidays_in_year(year: i32) -> Result<String, JsValue> {
    let instances = luach::holidays_in_year(year).map_err(to_js_err)?;
    to_json(&instances)
}

/// Reading for a Saturday, with portion metadata when loaded.
///
/// Returns `null` for days without a reading.
#[wasm_bindgen(js_name = "parashaForDate")]
pub fn parasha_for_date(iso: &str) -> Result<String, JsValue> {
    let date = parse_date(iso)?;
    SCHEDULER.with(|scheduler| {
        let reading = scheduler.parasha_for_date(date).map_err(to_js_err)?;
        match reading {
            Some(entry) => to_json(&ParashaDto {
                date: date.to_string(),
                reading: &entry,
                details: scheduler.details_for(&entry),
            }),
            None => Ok("null".to_string()),
        }
    })
}

/// Install the portion metadata table (a JSON array of `ParashaInfo`).
///
/// Only the first load takes effect; returns whether this one did.
#[wasm_bindgen(js_name = "loadParashaMetadata")]
pub fn load_parasha_metadata(json: &str) -> Result<bool, JsValue> {
    let table = MetadataTable::from_json(json).map_err(to_js_err)?;
    Ok(SCHEDULER.with(|scheduler| scheduler.install_metadata(table)))
}

/// Metadata for a reading name (`"A / B"` yields both halves). An empty
/// array when metadata is not loaded or the name is unknown.
#[wasm_bindgen(js_name = "parashaDetails")]
pub fn parasha_details(name: &str) -> Result<String, JsValue> {
    SCHEDULER.with(|scheduler| {
        let details = scheduler
            .metadata()
            .map(|table| table.details_for(name))
            .unwrap_or_default();
        to_json(&details)
    })
}

/// Whether portion metadata has been loaded.
#[wasm_bindgen(js_name = "hasParashaMetadata")]
pub fn has_parasha_metadata() -> bool {
    SCHEDULER.with(|scheduler| scheduler.metadata().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_from_gregorian_json() {
        let json = hebrew_from_gregorian("2026-03-03").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"], "14 Adar 5786");
        assert_eq!(value["weekday"], "Tue");
    }

    #[test]
    fn gregorian_from_hebrew_json() {
        let json = gregorian_from_hebrew(5784, "Adar II", 14).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2024-03-24");
    }

    #[test]
    fn tishrei1_json_has_civil_date() {
        let json = tishrei1(5786).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2025-09-23");
        assert_eq!(value["rules"]["B"], true);

        let json = year_info(5786).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tishrei1"]["date"], "2025-09-23");
    }

    #[test]
    fn parasha_with_metadata() {
        assert!(!has_parasha_metadata());
        assert_eq!(parasha_details("Bereshit").unwrap(), "[]");

        let loaded = load_parasha_metadata(
            r#"[{"name": "Vayakhel", "book": "Exodus"}, {"name": "Pekudei", "book": "Exodus"}]"#,
        )
        .unwrap();
        assert!(loaded);
        assert!(has_parasha_metadata());

        let json = parasha_for_date("2026-03-14").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Vayakhel / Pekudei");
        assert_eq!(value["details"].as_array().unwrap().len(), 2);

        assert_eq!(parasha_for_date("2026-03-13").unwrap(), "null");
    }
}
