//! Time and period calculation utilities.
//!
//! Period arguments arrive as calendar dates; all aggregation windows are
//! half-open `[from, to)` timestamp ranges derived here. The clock is an
//! injected abstraction so period calculations stay deterministic in tests.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::server::error::{kpi::KpiError, Error};

/// Injected time source. All timestamps are naive UTC, matching the
/// operational tables.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Half-open `[00:00, next day 00:00)` bounds of a calendar date.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Half-open `[desde 00:00, hasta 00:00)` bounds of a date range.
pub fn range_bounds(desde: NaiveDate, hasta: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (desde.and_time(NaiveTime::MIN), hasta.and_time(NaiveTime::MIN))
}

/// The immediately-preceding period of equal length: for `[desde, hasta)`
/// this is `[desde - len, desde)`.
pub fn previous_range(desde: NaiveDate, hasta: NaiveDate) -> (NaiveDate, NaiveDate) {
    let len = hasta - desde;
    (desde - len, desde)
}

/// Parses a `YYYY-MM-DD` period argument.
pub fn parse_period(raw: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| KpiError::InvalidPeriod(raw.to_string()).into())
}

/// Rejects empty or inverted ranges before any computation touches storage.
pub fn validate_range(desde: NaiveDate, hasta: NaiveDate) -> Result<(), Error> {
    if desde >= hasta {
        return Err(KpiError::InvalidPeriod(format!(
            "range start {} must be before range end {}",
            desde, hasta
        ))
        .into());
    }

    Ok(())
}

/// Elapsed hours between two timestamps, fractional, sign preserved.
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Hours of overlap between two half-open intervals; zero when disjoint.
pub fn overlap_hours(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> f64 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end > start {
        elapsed_hours(start, end)
    } else {
        0.0
    }
}
