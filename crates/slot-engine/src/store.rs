//! Record types and the persistence seam for schedule data.
//!
//! The engine is pure computation over already-fetched data; reads go
//! through [`ScheduleRepository`], implemented by the caller against the
//! hosted backend. Record types mirror the stored payloads — camelCase
//! field names and `"HH:MM"` time strings included. Time strings are parsed
//! into typed minutes at the point of use, not here.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Recurring working hours for one day of the week.
///
/// At most one record exists per (barber, day-of-week); the schedule
/// management UI upserts by day-of-week and never deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAvailabilityRecord {
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    /// Opening time, `"HH:MM"`.
    pub start_time: String,
    /// Closing time, `"HH:MM"`.
    pub end_time: String,
    pub is_available: bool,
}

/// A date-specific override of the weekly schedule — holiday closures,
/// early closing, one-off extended hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExceptionRecord {
    pub date: NaiveDate,
    /// Override opening time; `None` falls back to the weekly record's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Override closing time; `None` falls back to the weekly record's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// An occupied range derived from an appointment on the target date.
///
/// The backend filters to active statuses (scheduled/confirmed) server-side;
/// cancelled and completed appointments never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedIntervalRecord {
    /// Appointment start, `"HH:MM"`.
    pub start_time: String,
    pub duration_minutes: u16,
}

/// Read seam to the persistence collaborator.
///
/// Implementations own their I/O, timeout and retry policy. A fetch failure
/// must surface as [`crate::ScheduleError::Store`] — never as an empty list,
/// which the engine would read as a fully open or fully free schedule.
pub trait ScheduleRepository: Send + Sync {
    /// All weekly availability records for a barber (at most 7).
    fn weekly_availability(&self, barber_id: &str) -> Result<Vec<WeeklyAvailabilityRecord>>;

    /// Schedule exceptions with dates in the inclusive range `[from, to]`.
    fn schedule_exceptions(
        &self,
        barber_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ScheduleExceptionRecord>>;

    /// Booked intervals for a barber on one date, active statuses only.
    fn booked_intervals(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<BookedIntervalRecord>>;
}

/// In-memory [`ScheduleRepository`] for tests and UI previews.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchedule {
    weekly: HashMap<String, Vec<WeeklyAvailabilityRecord>>,
    exceptions: HashMap<String, Vec<ScheduleExceptionRecord>>,
    booked: HashMap<(String, NaiveDate), Vec<BookedIntervalRecord>>,
}

impl InMemorySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the weekly records for a barber.
    pub fn set_weekly(&mut self, barber_id: &str, records: Vec<WeeklyAvailabilityRecord>) {
        self.weekly.insert(barber_id.to_string(), records);
    }

    pub fn add_exception(&mut self, barber_id: &str, record: ScheduleExceptionRecord) {
        self.exceptions
            .entry(barber_id.to_string())
            .or_default()
            .push(record);
    }

    pub fn add_booked(&mut self, barber_id: &str, date: NaiveDate, record: BookedIntervalRecord) {
        self.booked
            .entry((barber_id.to_string(), date))
            .or_default()
            .push(record);
    }
}

impl ScheduleRepository for InMemorySchedule {
    fn weekly_availability(&self, barber_id: &str) -> Result<Vec<WeeklyAvailabilityRecord>> {
        Ok(self.weekly.get(barber_id).cloned().unwrap_or_default())
    }

    fn schedule_exceptions(
        &self,
        barber_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ScheduleExceptionRecord>> {
        Ok(self
            .exceptions
            .get(barber_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.date >= from && r.date <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn booked_intervals(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<BookedIntervalRecord>> {
        Ok(self
            .booked
            .get(&(barber_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }
}
