//! Effective-window resolution — layering the weekly rule and the
//! date-specific exception for one calendar date.
//!
//! The merge result is tagged: a date is either `Open { start, end }` or
//! `Closed`, so "no override" and "override to closed" cannot be confused.
//! Malformed stored time strings resolve `Closed` — the resolver fails
//! closed rather than producing slots from wall-clock gibberish.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::store::{ScheduleExceptionRecord, WeeklyAvailabilityRecord};
use crate::timeofday::TimeOfDay;

/// The resolved open/closed range for a barber on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EffectiveWindow {
    /// The barber takes appointments from `start` (inclusive) to `end`
    /// (exclusive) on this date.
    Open { start: TimeOfDay, end: TimeOfDay },
    /// No appointments on this date.
    Closed,
}

impl EffectiveWindow {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Day-of-week index used by stored weekly records: 0 = Sunday .. 6 = Saturday.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Pick the weekly rule matching `date`'s day-of-week, if any.
///
/// The store keeps at most one record per day-of-week; should that invariant
/// ever break upstream, the first record wins.
pub fn weekly_rule_for(
    records: &[WeeklyAvailabilityRecord],
    date: NaiveDate,
) -> Option<&WeeklyAvailabilityRecord> {
    let dow = day_of_week(date);
    records.iter().find(|r| r.day_of_week == dow)
}

/// Pick the exact-date exception, if any.
pub fn exception_for(
    records: &[ScheduleExceptionRecord],
    date: NaiveDate,
) -> Option<&ScheduleExceptionRecord> {
    records.iter().find(|r| r.date == date)
}

/// Resolve the effective window for one date from its weekly rule and
/// date-specific exception.
///
/// Layering order:
/// 1. No weekly record, or one flagged unavailable → the default is `Closed`.
/// 2. An exception flagged unavailable closes the date regardless of step 1.
/// 3. An available exception opens the date with its own times, falling back
///    to the weekly record's times where it provides none. A side with no
///    time from either source leaves the date `Closed`.
/// 4. No exception → the weekly result stands.
///
/// Any malformed `"HH:MM"` value, and any window whose start is not strictly
/// before its end, resolves `Closed`.
pub fn resolve_window(
    weekly: Option<&WeeklyAvailabilityRecord>,
    exception: Option<&ScheduleExceptionRecord>,
) -> EffectiveWindow {
    match exception {
        Some(ex) if !ex.is_available => EffectiveWindow::Closed,
        Some(ex) => {
            // The exception explicitly opens the date; the weekly record's
            // times are the fallback even when its own flag is off.
            let start = ex
                .start_time
                .as_deref()
                .or(weekly.map(|w| w.start_time.as_str()));
            let end = ex
                .end_time
                .as_deref()
                .or(weekly.map(|w| w.end_time.as_str()));
            open_window(start, end)
        }
        None => match weekly {
            Some(w) if w.is_available => open_window(Some(&w.start_time), Some(&w.end_time)),
            _ => EffectiveWindow::Closed,
        },
    }
}

/// Build an `Open` window from optional time strings, failing closed on a
/// missing side, a parse failure, or an inverted range.
fn open_window(start: Option<&str>, end: Option<&str>) -> EffectiveWindow {
    let (Some(start), Some(end)) = (start, end) else {
        return EffectiveWindow::Closed;
    };
    match (TimeOfDay::parse(start), TimeOfDay::parse(end)) {
        (Ok(start), Ok(end)) if start < end => EffectiveWindow::Open { start, end },
        _ => EffectiveWindow::Closed,
    }
}
