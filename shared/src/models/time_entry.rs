//! TimeEntry Model
//!
//! One row per (employee, date) work period. Created by clock-in with
//! status `active`; clock-out computes the derived duration fields and
//! moves it to `completed`, which is terminal.

use serde::{Deserialize, Serialize};

/// Time entry status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TimeEntryStatus {
    Active,
    Completed,
    Missed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    /// Joined from the employee row at read time
    pub employee_name: String,
    /// Calendar date "YYYY-MM-DD"
    pub date: String,
    /// Wall-clock "HH:MM:SS"
    pub clock_in: String,
    /// Wall-clock "HH:MM:SS"; unset while the entry is active
    pub clock_out: Option<String>,
    /// Break minutes
    pub break_time: i64,
    /// Derived at clock-out, rounded to 2 decimal places
    pub total_hours: f64,
    pub status: TimeEntryStatus,
    /// true iff total_hours > 8
    pub overtime: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
