//! Employee Model

use serde::{Deserialize, Serialize};

use super::Permission;

/// Employee status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Employee read projection
///
/// `department` is resolved from the department row at read time and is
/// never written back; `permissions` is attached from the permission links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department_id: Option<i64>,
    pub department: String,
    pub status: EmployeeStatus,
    /// Hire date (YYYY-MM-DD)
    pub start_date: String,
    pub hourly_rate: f64,
    #[serde(default)]
    #[cfg_attr(feature = "db", sqlx(skip))]
    pub permissions: Vec<Permission>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department_id: Option<i64>,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub start_date: String,
    pub hourly_rate: f64,
}

/// Update employee payload (partial patch; start_date is immutable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}
