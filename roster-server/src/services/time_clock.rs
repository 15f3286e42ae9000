//! Time-Tracking Service
//!
//! Clock-in/clock-out lifecycle per (employee, date):
//!
//! ```text
//! Absent --clock_in--> Active --clock_out--> Completed (terminal)
//! ```
//!
//! Duration math anchors both wall-clock instants to the entry's calendar
//! date, so an entry cannot represent a period spanning midnight. There is
//! no guard against a clock-out instant earlier than clock-in (clock skew
//! between precondition read and write); the raw difference is stored.

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::TimeEntry;
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, employee, time_entry};
use crate::services::notifier;
use crate::utils::{AppError, AppResult, time};

/// Hours above which a single day's entry is flagged as overtime
pub const OVERTIME_THRESHOLD_HOURS: f64 = 8.0;

/// Round to 2 decimal places, the precision of stored total_hours
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Worked hours between two wall-clock strings anchored to one date,
/// rounded to 2 decimal places.
pub fn total_hours_between(date: NaiveDate, clock_in: &str, clock_out: &str) -> AppResult<f64> {
    let start = time::anchor(date, time::parse_wall_clock(clock_in)?);
    let end = time::anchor(date, time::parse_wall_clock(clock_out)?);
    let hours = (end - start).num_seconds() as f64 / 3600.0;
    Ok(round_hours(hours))
}

/// Overtime iff strictly above the threshold
pub fn is_overtime(total_hours: f64) -> bool {
    total_hours > OVERTIME_THRESHOLD_HOURS
}

/// Outcome of a clock-in attempt
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClockInOutcome {
    ClockedIn { entry: TimeEntry },
    AlreadyClockedIn,
}

/// Outcome of a clock-out attempt
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClockOutOutcome {
    ClockedOut { entry: TimeEntry },
    NotClockedIn,
}

/// Clock-in/clock-out state transitions over the time_entries collection
#[derive(Clone)]
pub struct TimeClockService {
    pool: SqlitePool,
    tz: Tz,
}

impl TimeClockService {
    pub fn new(pool: SqlitePool, tz: Tz) -> Self {
        Self { pool, tz }
    }

    /// Start a work period for today.
    ///
    /// A second call while an entry is active creates no row and emits a
    /// warning notification instead of a success one. An unknown employee
    /// id is a reportable NotFound error.
    pub async fn clock_in(&self, employee_id: i64) -> AppResult<ClockInOutcome> {
        let employee = employee::find_by_id(&self.pool, employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {employee_id} not found")))?;

        let today = time::today_in(self.tz).format("%Y-%m-%d").to_string();

        if time_entry::find_active(&self.pool, employee_id, &today)
            .await?
            .is_some()
        {
            notifier::already_clocked_in(&self.pool, &employee.name).await?;
            return Ok(ClockInOutcome::AlreadyClockedIn);
        }

        let now = time::now_wall_clock(self.tz);
        let clock_in = now.format("%H:%M:%S").to_string();

        let entry = match time_entry::insert_active(&self.pool, employee_id, &today, &clock_in).await
        {
            Ok(entry) => entry,
            // Racing clock-in lost to the unique index: same business
            // outcome as the precondition check catching it.
            Err(RepoError::Duplicate(_)) => {
                notifier::already_clocked_in(&self.pool, &employee.name).await?;
                return Ok(ClockInOutcome::AlreadyClockedIn);
            }
            Err(e) => return Err(e.into()),
        };

        notifier::clocked_in(
            &self.pool,
            &employee.name,
            &now.format("%H:%M").to_string(),
        )
        .await?;

        tracing::info!(employee_id, date = %today, clock_in = %clock_in, "Employee clocked in");
        Ok(ClockInOutcome::ClockedIn { entry })
    }

    /// End today's active work period and compute the derived fields.
    pub async fn clock_out(&self, employee_id: i64) -> AppResult<ClockOutOutcome> {
        let employee = employee::find_by_id(&self.pool, employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {employee_id} not found")))?;

        let today_date = time::today_in(self.tz);
        let today = today_date.format("%Y-%m-%d").to_string();

        let Some(active) = time_entry::find_active(&self.pool, employee_id, &today).await? else {
            notifier::not_clocked_in(&self.pool, &employee.name).await?;
            return Ok(ClockOutOutcome::NotClockedIn);
        };

        let now = time::now_wall_clock(self.tz);
        let clock_out = now.format("%H:%M:%S").to_string();

        let total_hours = total_hours_between(today_date, &active.clock_in, &clock_out)?;
        let overtime = is_overtime(total_hours);

        let entry =
            time_entry::complete(&self.pool, active.id, &clock_out, total_hours, overtime).await?;

        notifier::clocked_out(
            &self.pool,
            &employee.name,
            &now.format("%H:%M").to_string(),
        )
        .await?;

        tracing::info!(
            employee_id,
            date = %today,
            total_hours,
            overtime,
            "Employee clocked out"
        );
        Ok(ClockOutOutcome::ClockedOut { entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn full_day_with_half_hour_is_overtime() {
        let hours = total_hours_between(date(), "09:00:00", "17:30:00").unwrap();
        assert_eq!(hours, 8.5);
        assert!(is_overtime(hours));
    }

    #[test]
    fn exactly_eight_hours_is_not_overtime() {
        let hours = total_hours_between(date(), "09:00:00", "17:00:00").unwrap();
        assert_eq!(hours, 8.0);
        assert!(!is_overtime(hours));
    }

    #[test]
    fn seconds_round_to_two_decimal_places() {
        // 8h 20m = 8.333.. -> 8.33
        let hours = total_hours_between(date(), "08:00:00", "16:20:00").unwrap();
        assert_eq!(hours, 8.33);
    }

    #[test]
    fn short_period_rounds_down() {
        // 25 minutes = 0.41666.. -> 0.42
        let hours = total_hours_between(date(), "12:00:00", "12:25:00").unwrap();
        assert_eq!(hours, 0.42);
    }

    #[test]
    fn clock_out_before_clock_in_is_stored_raw() {
        // No skew guard: the anchored difference may be negative
        let hours = total_hours_between(date(), "17:00:00", "09:00:00").unwrap();
        assert_eq!(hours, -8.0);
        assert!(!is_overtime(hours));
    }

    #[test]
    fn rejects_unparseable_wall_clock() {
        assert!(total_hours_between(date(), "not-a-time", "17:00:00").is_err());
    }
}
