//! Shift Model

use serde::{Deserialize, Serialize};

/// Shift status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ShiftStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl Default for ShiftStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

/// Shift read projection
///
/// `employee_name`, `role` and `department` come from read-time joins
/// against the employee and department rows, never from the write path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shift {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub role: String,
    pub department: String,
    /// Wall-clock "HH:MM"
    pub start_time: String,
    /// Wall-clock "HH:MM"
    pub end_time: String,
    /// Calendar date "YYYY-MM-DD"
    pub date: String,
    pub status: ShiftStatus,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub employee_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    #[serde(default)]
    pub status: ShiftStatus,
    pub notes: Option<String>,
}

/// Update shift payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShiftStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
