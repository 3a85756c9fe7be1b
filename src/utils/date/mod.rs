// Date utility functions
// Calendar arithmetic and fixed-offset normalization

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Offset used when no settings override it (UTC+5:30).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 5 * 60 + 30;

/// Largest offset accepted by `FixedOffset`, exclusive of a full day.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Errors produced by calendar arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Month index {0} is outside 0..=11")]
    InvalidMonth(u32),

    #[error("Day {day} does not exist in month {month0} (0-indexed) of {year}")]
    InvalidDay { year: i32, month0: u32, day: u32 },

    #[error("UTC offset of {0} minutes is outside the supported range")]
    InvalidOffset(i32),

    #[error("Date is outside the representable range")]
    OutOfRange,
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Used by tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Build a `FixedOffset` from a minute count east of UTC.
pub fn fixed_offset(offset_minutes: i32) -> Result<FixedOffset, DateError> {
    if offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES as u32 {
        return Err(DateError::InvalidOffset(offset_minutes));
    }

    FixedOffset::east_opt(offset_minutes * 60).ok_or(DateError::InvalidOffset(offset_minutes))
}

/// Wall-clock date and time of `instant` as seen at a fixed UTC offset.
///
/// The host timezone plays no part, so the same instant always yields the
/// same local moment wherever the program runs.
pub fn normalize_to_fixed_offset(
    instant: DateTime<Utc>,
    offset_minutes: i32,
) -> Result<NaiveDateTime, DateError> {
    let offset = fixed_offset(offset_minutes)?;
    Ok(instant.with_timezone(&offset).naive_local())
}

/// First day of a month, `month0` being 0-indexed.
pub fn first_of_month(year: i32, month0: u32) -> Result<NaiveDate, DateError> {
    if month0 > 11 {
        return Err(DateError::InvalidMonth(month0));
    }

    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(DateError::OutOfRange)
}

/// Number of days in the month, found as the day before the first of the
/// following month.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, DateError> {
    first_of_month(year, month0)?;
    let (next_year, next_month0) = shift_month(year, month0, 1);

    first_of_month(next_year, next_month0)?
        .pred_opt()
        .map(|last| last.day())
        .ok_or(DateError::OutOfRange)
}

/// Weekday of the first of the month, 0 = Sunday through 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> Result<u32, DateError> {
    Ok(first_of_month(year, month0)?
        .weekday()
        .num_days_from_sunday())
}

/// Move `delta` months from `(year, month0)`, rolling over year boundaries.
pub fn shift_month(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total_months = year * 12 + month0 as i32 + delta;
    (total_months.div_euclid(12), total_months.rem_euclid(12) as u32)
}
