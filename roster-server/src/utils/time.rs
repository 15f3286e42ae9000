//! Time helpers — business-timezone dates and wall-clock parsing
//!
//! All date/time strings cross the API as text ("YYYY-MM-DD", "HH:MM",
//! "HH:MM:SS"); parsing and timezone resolution happen here so the
//! repository layer only ever sees validated strings.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a wall-clock time ("HH:MM" or "HH:MM:SS")
pub fn parse_wall_clock(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// Today's calendar date in the business timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Current wall-clock time in the business timezone, second precision
pub fn now_wall_clock(tz: Tz) -> NaiveTime {
    let t = Utc::now().with_timezone(&tz).time();
    t.with_nanosecond(0).unwrap_or(t)
}

/// Anchor a wall-clock time to a calendar date.
///
/// Both ends of a time entry are anchored to the same date, so an entry
/// cannot represent a period that spans midnight.
pub fn anchor(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    date - chrono::Duration::days(days_from_monday)
}
