//! Slot generation over a resolved window.
//!
//! Candidate starts sit on a fixed 30-minute grid from the window start,
//! independent of the requested service duration — a 45-minute cut can
//! begin only at :00/:30 marks, never mid-slot. The booking UI depends on
//! this grid; do not align it to the duration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::resolver::EffectiveWindow;
use crate::store::BookedIntervalRecord;
use crate::timeofday::TimeOfDay;

/// Grid spacing for candidate slot starts, in minutes.
pub const SLOT_GRID_MINUTES: u16 = 30;

/// An occupied range on the target date, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: TimeOfDay,
    pub duration_minutes: u16,
}

impl BookedInterval {
    /// Exclusive end of the occupied range as minutes from midnight.
    /// Widened to `u32` — a late booking's end may run past midnight.
    pub fn end_minutes(&self) -> u32 {
        u32::from(self.start.minutes()) + u32::from(self.duration_minutes)
    }
}

impl TryFrom<&BookedIntervalRecord> for BookedInterval {
    type Error = ScheduleError;

    /// # Errors
    /// Returns [`ScheduleError::MalformedTime`] when the stored start time
    /// does not parse. The caller must treat that as a failure — dropping an
    /// occupied range would offer slots that over-book.
    fn try_from(record: &BookedIntervalRecord) -> Result<Self> {
        Ok(Self {
            start: TimeOfDay::parse(&record.start_time)?,
            duration_minutes: record.duration_minutes,
        })
    }
}

/// A bookable start time for a requested service duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub start: TimeOfDay,
    pub duration_minutes: u16,
}

impl Slot {
    /// Exclusive end of the slot as minutes from midnight.
    pub fn end_minutes(&self) -> u32 {
        u32::from(self.start.minutes()) + u32::from(self.duration_minutes)
    }
}

/// Generate the ordered bookable slots for one date.
///
/// Candidates are every [`SLOT_GRID_MINUTES`] from the window start such
/// that the full service fits before the window end. A candidate is rejected
/// iff it overlaps a booked interval under the half-open test
/// `candidate < booked_end && candidate + duration > booked_start`.
/// A booking that ends exactly when the candidate starts does not reject it.
///
/// A `Closed` window yields an empty list. The result is eagerly
/// materialized in ascending order; slot counts are small (≤ ~30/day).
///
/// # Errors
/// Returns [`ScheduleError::InvalidDuration`] when `duration_minutes` is 0.
pub fn generate_slots(
    window: &EffectiveWindow,
    duration_minutes: u16,
    booked: &[BookedInterval],
) -> Result<Vec<Slot>> {
    if duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    let EffectiveWindow::Open { start, end } = window else {
        return Ok(Vec::new());
    };

    // All arithmetic in u32 minutes: u16 would overflow for a long service
    // near the end of the day.
    let window_end = u32::from(end.minutes());
    let duration = u32::from(duration_minutes);
    let grid = u32::from(SLOT_GRID_MINUTES);

    let mut slots = Vec::new();
    let mut candidate = u32::from(start.minutes());
    while candidate + duration <= window_end {
        let candidate_end = candidate + duration;
        let blocked = booked.iter().any(|b| {
            candidate < b.end_minutes() && candidate_end > u32::from(b.start.minutes())
        });
        if !blocked {
            // candidate < window_end <= 1439 here, so the narrowing never fails.
            if let Some(slot_start) = TimeOfDay::from_minutes(candidate as u16) {
                slots.push(Slot {
                    start: slot_start,
                    duration_minutes,
                });
            }
        }
        candidate += grid;
    }

    Ok(slots)
}
