//! End-to-end slot computation against a [`ScheduleRepository`].
//!
//! Ties the resolver and the generator together for one (barber, date)
//! query: fetch the weekly rule and exception, resolve the window, fetch
//! booked intervals only when the date is open, generate slots. Fetch
//! failures propagate to the caller; they are never read as "fully open"
//! or "fully booked".

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::resolver::{exception_for, resolve_window, weekly_rule_for, EffectiveWindow};
use crate::slots::{generate_slots, BookedInterval, Slot};
use crate::store::ScheduleRepository;

/// Resolve the effective window for a barber on one date.
pub fn effective_window<R>(repo: &R, barber_id: &str, date: NaiveDate) -> Result<EffectiveWindow>
where
    R: ScheduleRepository + ?Sized,
{
    let weekly = repo.weekly_availability(barber_id)?;
    let exceptions = repo.schedule_exceptions(barber_id, date, date)?;
    Ok(resolve_window(
        weekly_rule_for(&weekly, date),
        exception_for(&exceptions, date),
    ))
}

/// Compute the bookable slots for a service of `duration_minutes` on `date`.
///
/// A closed date short-circuits to an empty list without fetching
/// appointments.
///
/// # Errors
/// [`ScheduleError::InvalidDuration`] for a zero duration (rejected before
/// any fetch), [`ScheduleError::Store`] when a fetch fails, and
/// [`ScheduleError::MalformedTime`] when a booked interval's stored time
/// does not parse — dropping an occupied range would over-book.
pub fn bookable_slots<R>(
    repo: &R,
    barber_id: &str,
    date: NaiveDate,
    duration_minutes: u16,
) -> Result<Vec<Slot>>
where
    R: ScheduleRepository + ?Sized,
{
    if duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }

    let window = effective_window(repo, barber_id, date)?;
    if !window.is_open() {
        return Ok(Vec::new());
    }

    let booked = repo
        .booked_intervals(barber_id, date)?
        .iter()
        .map(BookedInterval::try_from)
        .collect::<Result<Vec<_>>>()?;

    generate_slots(&window, duration_minutes, &booked)
}

/// The dates in the inclusive range `[from, to]` that resolve open.
///
/// One weekly fetch and one ranged exception fetch cover the whole range;
/// the booking UI uses this to gray out closed days in the date picker.
pub fn open_dates<R>(
    repo: &R,
    barber_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<NaiveDate>>
where
    R: ScheduleRepository + ?Sized,
{
    if from > to {
        return Ok(Vec::new());
    }

    let weekly = repo.weekly_availability(barber_id)?;
    let exceptions = repo.schedule_exceptions(barber_id, from, to)?;

    Ok(from
        .iter_days()
        .take_while(|date| *date <= to)
        .filter(|date| {
            resolve_window(
                weekly_rule_for(&weekly, *date),
                exception_for(&exceptions, *date),
            )
            .is_open()
        })
        .collect())
}
