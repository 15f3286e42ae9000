//! Department Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub id: i64,
    /// Unique by convention; not enforced in application code
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<i64>,
}
