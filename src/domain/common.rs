use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{GymError, GymResult};

/// Input format for birth dates and notification dates (`dd-MM-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";
/// Input and display format for session times (`dd-MM-yyyy HH:mm`).
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";
/// Compact ISO-like format used in action log entries.
pub const LOG_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const FIRST_PARTY_ID: u32 = 1111;

static NEXT_PARTY_ID: AtomicU32 = AtomicU32::new(FIRST_PARTY_ID);
static NEXT_GYM_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a person taking part in gym life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartyId(pub u32);

impl PartyId {
    /// Hands out the next identifier; ids are never reused.
    pub fn next() -> Self {
        Self(NEXT_PARTY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-unique identity of a gym. Secretary and session handles carry the
/// id of the gym that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GymId(u64);

impl GymId {
    pub(crate) fn next() -> Self {
        Self(NEXT_GYM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gym-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Identifies parties that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> PartyId;
}

/// Provides access to a human-friendly party name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

pub fn parse_date(input: &str) -> GymResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| GymError::InvalidDate {
        input: input.to_string(),
        expected: "dd-MM-yyyy",
        source,
    })
}

pub fn parse_date_time(input: &str) -> GymResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).map_err(|source| {
        GymError::InvalidDate {
            input: input.to_string(),
            expected: "dd-MM-yyyy HH:mm",
            source,
        }
    })
}

/// Renders an amount the way balances are displayed: truncated toward zero.
pub fn whole_units(amount: f64) -> i64 {
    amount.trunc() as i64
}
