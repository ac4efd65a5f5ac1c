//! WASM bindings for slot-engine.
//!
//! Exposes window resolution and slot generation to the JavaScript booking
//! UI via `wasm-bindgen`. All complex types cross the boundary as JSON
//! strings in the same shape the hosted backend serves — camelCase keys,
//! `"HH:MM"` times, `"YYYY-MM-DD"` dates.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use slot_engine::resolver::{exception_for, resolve_window, weekly_rule_for, EffectiveWindow};
use slot_engine::slots::{generate_slots, BookedInterval, Slot};
use slot_engine::store::{BookedIntervalRecord, ScheduleExceptionRecord, WeeklyAvailabilityRecord};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON and date parsing at the boundary
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn from_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Convert a JSON array of booked-interval records into typed intervals.
/// A malformed stored time is an error — dropping a blocker would over-book.
fn parse_booked(json: &str) -> Result<Vec<BookedInterval>, JsValue> {
    let records: Vec<BookedIntervalRecord> = from_json(json, "booked intervals")?;
    records
        .iter()
        .map(|r| BookedInterval::try_from(r).map_err(|e| JsValue::from_str(&e.to_string())))
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve the effective open/closed window for one date.
///
/// `weekly_json` is the barber's full weekly availability list;
/// `exceptions_json` an exception list covering `date` (extra dates are
/// ignored). Returns a JSON object —
/// `{"status":"open","start":"09:00","end":"17:00"}` or `{"status":"closed"}`.
#[wasm_bindgen(js_name = "resolveWindow")]
pub fn resolve_window_js(
    weekly_json: &str,
    exceptions_json: &str,
    date: &str,
) -> Result<String, JsValue> {
    let weekly: Vec<WeeklyAvailabilityRecord> = from_json(weekly_json, "weekly availability")?;
    let exceptions: Vec<ScheduleExceptionRecord> =
        from_json(exceptions_json, "schedule exceptions")?;
    let date = parse_date(date)?;

    let window = resolve_window(
        weekly_rule_for(&weekly, date),
        exception_for(&exceptions, date),
    );
    to_json(&window)
}

/// Generate bookable slots from a resolved window.
///
/// `window_json` is the object returned by `resolveWindow`; `booked_json`
/// the booked-interval list for the date. Returns a JSON array of
/// `{"start":"HH:MM","durationMinutes":n}` slots in ascending order.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots_js(
    window_json: &str,
    duration_minutes: u16,
    booked_json: &str,
) -> Result<String, JsValue> {
    let window: EffectiveWindow = from_json(window_json, "window")?;
    let booked = parse_booked(booked_json)?;

    let slots = generate_slots(&window, duration_minutes, &booked)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&slots)
}

/// Resolve and generate in one call for one (barber, date) query.
///
/// A closed date returns `[]` without parsing `booked_json` at all.
#[wasm_bindgen(js_name = "bookableSlots")]
pub fn bookable_slots_js(
    weekly_json: &str,
    exceptions_json: &str,
    booked_json: &str,
    date: &str,
    duration_minutes: u16,
) -> Result<String, JsValue> {
    let weekly: Vec<WeeklyAvailabilityRecord> = from_json(weekly_json, "weekly availability")?;
    let exceptions: Vec<ScheduleExceptionRecord> =
        from_json(exceptions_json, "schedule exceptions")?;
    let date = parse_date(date)?;

    let window = resolve_window(
        weekly_rule_for(&weekly, date),
        exception_for(&exceptions, date),
    );
    if !window.is_open() {
        return to_json(&Vec::<Slot>::new());
    }

    let booked = parse_booked(booked_json)?;
    let slots = generate_slots(&window, duration_minutes, &booked)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&slots)
}
