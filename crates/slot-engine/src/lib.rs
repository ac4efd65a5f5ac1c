//! # slot-engine
//!
//! Availability resolution and bookable-slot generation for barbershop
//! scheduling.
//!
//! Given a barber's recurring weekly working hours, date-specific exceptions
//! (holidays, modified hours) and already-booked appointments, the engine
//! computes the bookable start times for a requested service duration on a
//! requested date. The computation is pure, synchronous and deterministic;
//! persistence reads go through the [`store::ScheduleRepository`] seam and
//! every call is independent, so concurrent queries for different
//! (barber, date) pairs need no coordination.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::bookable_slots;
//! use slot_engine::store::{InMemorySchedule, WeeklyAvailabilityRecord};
//!
//! let mut repo = InMemorySchedule::new();
//! repo.set_weekly(
//!     "barber-1",
//!     vec![WeeklyAvailabilityRecord {
//!         day_of_week: 1, // Monday
//!         start_time: "09:00".into(),
//!         end_time: "17:00".into(),
//!         is_available: true,
//!     }],
//! );
//!
//! // 2026-03-16 is a Monday: 16 half-hour starts between 09:00 and 17:00.
//! let date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
//! let slots = bookable_slots(&repo, "barber-1", date, 30).unwrap();
//! assert_eq!(slots.len(), 16);
//! assert_eq!(slots[0].start.to_string(), "09:00");
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — weekly rule + exception → effective open/closed window
//! - [`slots`] — effective window + bookings → ordered bookable slots
//! - [`engine`] — end-to-end queries against a repository
//! - [`store`] — record types and the persistence seam
//! - [`cache`] — injectable short-lived cache with explicit invalidation
//! - [`timeofday`] — `"HH:MM"` parsing and minute arithmetic
//! - [`error`] — error types

pub mod cache;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod slots;
pub mod store;
pub mod timeofday;

pub use cache::{bookable_slots_cached, SlotCache};
pub use engine::{bookable_slots, effective_window, open_dates};
pub use error::ScheduleError;
pub use resolver::{resolve_window, EffectiveWindow};
pub use slots::{generate_slots, BookedInterval, Slot, SLOT_GRID_MINUTES};
pub use store::ScheduleRepository;
pub use timeofday::TimeOfDay;
