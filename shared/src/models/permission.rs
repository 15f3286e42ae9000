//! Permission Model
//!
//! Named capability strings gating feature areas. The catalog is seeded by
//! migration; `name` is the stable key used by access checks.

use serde::{Deserialize, Serialize};

/// Permissions granted to every newly created employee
pub const DEFAULT_EMPLOYEE_PERMISSIONS: [&str; 4] = [
    "view_dashboard",
    "clock_in_out",
    "view_own_schedule",
    "request_time_off",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Permission {
    pub id: i64,
    /// Stable key, e.g. "manage_employees"
    pub name: String,
    pub description: String,
    /// Feature-area grouping label, e.g. "employees"
    pub module: String,
}
