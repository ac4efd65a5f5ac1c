//! Tests for effective-window resolution — weekly rule layered with
//! date-specific exceptions.

use chrono::NaiveDate;
use slot_engine::resolver::{
    day_of_week, exception_for, resolve_window, weekly_rule_for, EffectiveWindow,
};
use slot_engine::store::{ScheduleExceptionRecord, WeeklyAvailabilityRecord};
use slot_engine::timeofday::TimeOfDay;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn weekly(day_of_week: u8, start: &str, end: &str, available: bool) -> WeeklyAvailabilityRecord {
    WeeklyAvailabilityRecord {
        day_of_week,
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_available: available,
    }
}

fn exception(
    date: NaiveDate,
    start: Option<&str>,
    end: Option<&str>,
    available: bool,
) -> ScheduleExceptionRecord {
    ScheduleExceptionRecord {
        date,
        start_time: start.map(str::to_string),
        end_time: end.map(str::to_string),
        is_available: available,
        reason: None,
    }
}

fn open(start: &str, end: &str) -> EffectiveWindow {
    EffectiveWindow::Open {
        start: TimeOfDay::parse(start).unwrap(),
        end: TimeOfDay::parse(end).unwrap(),
    }
}

/// 2026-03-16 is a Monday (day-of-week 1).
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

// ── Defaults without an exception ───────────────────────────────────────────

#[test]
fn no_weekly_rule_resolves_closed() {
    assert_eq!(resolve_window(None, None), EffectiveWindow::Closed);
}

#[test]
fn unavailable_weekly_rule_resolves_closed() {
    let w = weekly(1, "09:00", "17:00", false);
    assert_eq!(resolve_window(Some(&w), None), EffectiveWindow::Closed);
}

#[test]
fn weekly_rule_applies_as_is_without_exception() {
    let w = weekly(1, "09:00", "17:00", true);
    assert_eq!(resolve_window(Some(&w), None), open("09:00", "17:00"));
}

// ── Exception layering ──────────────────────────────────────────────────────

#[test]
fn unavailable_exception_closes_an_available_day() {
    // Holiday closure beats the weekly rule.
    let w = weekly(1, "09:00", "17:00", true);
    let ex = exception(monday(), None, None, false);
    assert_eq!(resolve_window(Some(&w), Some(&ex)), EffectiveWindow::Closed);
}

#[test]
fn available_exception_without_times_uses_weekly_times() {
    let w = weekly(1, "09:00", "17:00", true);
    let ex = exception(monday(), None, None, true);
    assert_eq!(resolve_window(Some(&w), Some(&ex)), open("09:00", "17:00"));
}

#[test]
fn exception_overrides_both_times() {
    // Early closing: 10:00-14:00 instead of the usual 09:00-17:00.
    let w = weekly(1, "09:00", "17:00", true);
    let ex = exception(monday(), Some("10:00"), Some("14:00"), true);
    assert_eq!(resolve_window(Some(&w), Some(&ex)), open("10:00", "14:00"));
}

#[test]
fn exception_overrides_one_side_only() {
    let w = weekly(1, "09:00", "17:00", true);

    let late_open = exception(monday(), Some("11:00"), None, true);
    assert_eq!(
        resolve_window(Some(&w), Some(&late_open)),
        open("11:00", "17:00")
    );

    let early_close = exception(monday(), None, Some("13:00"), true);
    assert_eq!(
        resolve_window(Some(&w), Some(&early_close)),
        open("09:00", "13:00")
    );
}

#[test]
fn exception_without_weekly_rule_needs_its_own_times() {
    // No weekly record to fall back to: both sides must come from the
    // exception itself.
    let full = exception(monday(), Some("10:00"), Some("15:00"), true);
    assert_eq!(resolve_window(None, Some(&full)), open("10:00", "15:00"));

    let partial = exception(monday(), Some("10:00"), None, true);
    assert_eq!(resolve_window(None, Some(&partial)), EffectiveWindow::Closed);
}

#[test]
fn exception_reopens_a_day_the_weekly_rule_closes() {
    // The weekly row is flagged off but still carries the reference hours;
    // an available exception opens the date with them.
    let w = weekly(1, "09:00", "17:00", false);
    let ex = exception(monday(), None, None, true);
    assert_eq!(resolve_window(Some(&w), Some(&ex)), open("09:00", "17:00"));
}

// ── Fail-closed on bad stored data ──────────────────────────────────────────

#[test]
fn malformed_weekly_time_fails_closed() {
    for (start, end) in [("9am", "17:00"), ("09:00", "25:00"), ("", "17:00")] {
        let w = weekly(1, start, end, true);
        assert_eq!(
            resolve_window(Some(&w), None),
            EffectiveWindow::Closed,
            "weekly {start:?}-{end:?} should fail closed"
        );
    }
}

#[test]
fn malformed_exception_time_fails_closed() {
    let w = weekly(1, "09:00", "17:00", true);
    let ex = exception(monday(), Some("10:77"), None, true);
    assert_eq!(resolve_window(Some(&w), Some(&ex)), EffectiveWindow::Closed);
}

#[test]
fn inverted_window_fails_closed() {
    let w = weekly(1, "17:00", "09:00", true);
    assert_eq!(resolve_window(Some(&w), None), EffectiveWindow::Closed);

    let zero_length = weekly(1, "09:00", "09:00", true);
    assert_eq!(resolve_window(Some(&zero_length), None), EffectiveWindow::Closed);
}

// ── Record selection helpers ────────────────────────────────────────────────

#[test]
fn day_of_week_uses_sunday_zero_convention() {
    let sunday = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();
    assert_eq!(day_of_week(sunday), 0);
    assert_eq!(day_of_week(monday()), 1);
    assert_eq!(day_of_week(saturday), 6);
}

#[test]
fn weekly_rule_for_picks_matching_day() {
    let records = vec![
        weekly(0, "10:00", "14:00", true),
        weekly(1, "09:00", "17:00", true),
    ];

    let rule = weekly_rule_for(&records, monday()).expect("Monday rule exists");
    assert_eq!(rule.day_of_week, 1);

    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
    assert!(weekly_rule_for(&records, tuesday).is_none());
}

#[test]
fn exception_for_matches_exact_date_only() {
    let records = vec![exception(monday(), None, None, false)];

    assert!(exception_for(&records, monday()).is_some());

    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
    assert!(exception_for(&records, tuesday).is_none());
}
