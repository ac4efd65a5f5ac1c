//! Short-lived cache for computed slot lists.
//!
//! Explicit and injectable: the caller's request-scoping layer owns the
//! cache — never hidden process-wide state — and is responsible for calling
//! [`SlotCache::invalidate`] whenever an appointment for a barber is created
//! or cancelled. Staleness is otherwise bounded by the TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::engine::bookable_slots;
use crate::error::Result;
use crate::slots::Slot;
use crate::store::ScheduleRepository;

#[derive(Debug, Clone)]
struct CacheEntry {
    slots: Vec<Slot>,
    inserted_at: Instant,
}

/// Cache of computed slot lists, keyed by (barber id, date, duration).
///
/// The duration is part of the key: slot lists for different service
/// durations are different values.
#[derive(Debug)]
pub struct SlotCache {
    ttl: Duration,
    entries: HashMap<(String, NaiveDate, u16), CacheEntry>,
}

impl SlotCache {
    /// The longest the contract permits serving a cached slot list.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    /// A cache with a custom TTL. Production callers must stay at or below
    /// [`Self::DEFAULT_TTL`]; tests use shorter values.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// The cached slot list for this query, if present and fresh.
    /// An expired entry is evicted on the way out.
    pub fn get(&mut self, barber_id: &str, date: NaiveDate, duration_minutes: u16) -> Option<Vec<Slot>> {
        let key = (barber_id.to_string(), date, duration_minutes);
        match self.entries.get(&key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.slots.clone()),
            Some(_) => {
                self.entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store a computed slot list.
    pub fn insert(
        &mut self,
        barber_id: &str,
        date: NaiveDate,
        duration_minutes: u16,
        slots: Vec<Slot>,
    ) {
        self.entries.insert(
            (barber_id.to_string(), date, duration_minutes),
            CacheEntry {
                slots,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop every cached entry for a barber, across all dates and durations.
    /// Must be called when an appointment for the barber is created or
    /// cancelled, so no stale slot list survives the write.
    pub fn invalidate(&mut self, barber_id: &str) {
        self.entries
            .retain(|(cached_barber, _, _), _| cached_barber != barber_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SlotCache {
    fn default() -> Self {
        Self::new()
    }
}

/// [`bookable_slots`] with a cache consultation in front.
///
/// Errors are surfaced to the caller and never cached.
pub fn bookable_slots_cached<R>(
    repo: &R,
    cache: &mut SlotCache,
    barber_id: &str,
    date: NaiveDate,
    duration_minutes: u16,
) -> Result<Vec<Slot>>
where
    R: ScheduleRepository + ?Sized,
{
    if let Some(slots) = cache.get(barber_id, date, duration_minutes) {
        return Ok(slots);
    }

    let slots = bookable_slots(repo, barber_id, date, duration_minutes)?;
    cache.insert(barber_id, date, duration_minutes, slots.clone());
    Ok(slots)
}
