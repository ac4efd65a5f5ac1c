//! Minute-resolution wall-clock times.
//!
//! All scheduling arithmetic is integer minutes since midnight. `"HH:MM"`
//! strings coming out of stored records are parsed into [`TimeOfDay`] at the
//! data-access boundary; a string that does not parse is a typed error,
//! never a silently corrupted value flowing into arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// A wall-clock time of day with minute resolution.
///
/// Stored as minutes since midnight (`0..1440`). Civil time only — no
/// timezone, no DST adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Parse an `"HH:MM"` string (e.g. `"09:30"`).
    ///
    /// Accepts 1–2 digit hours and exactly 2-digit minutes. Hours above 23
    /// or minutes above 59 are rejected, so `"24:00"` is not a valid time.
    ///
    /// # Errors
    /// Returns [`ScheduleError::MalformedTime`] for anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let malformed = || ScheduleError::MalformedTime(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
            return Err(malformed());
        }
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hours: u16 = hh.parse().map_err(|_| malformed())?;
        let minutes: u16 = mm.parse().map_err(|_| malformed())?;
        if hours > 23 || minutes > 59 {
            return Err(malformed());
        }

        Ok(Self(hours * 60 + minutes))
    }

    /// Construct from minutes since midnight. Returns `None` outside `0..1440`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < Self::MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Serializes as the same "HH:MM" string the stored records use, so typed
// values round-trip the backend payloads unchanged.
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
