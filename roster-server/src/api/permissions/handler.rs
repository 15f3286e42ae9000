//! Permission API Handlers
//!
//! Permission changes are the one mutating surface that emits no
//! notification.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{Employee, Permission};

use crate::core::ServerState;
use crate::db::repository::{employee, permission};
use crate::utils::{AppError, AppResult};

/// The seeded permission catalog, grouped by module
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Permission>>> {
    let permissions = permission::find_all(&state.pool).await?;
    Ok(Json(permissions))
}

#[derive(Debug, Deserialize)]
pub struct ReplacePayload {
    pub permission_ids: Vec<i64>,
}

/// Replace an employee's granted permission set
pub async fn replace_for_employee(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReplacePayload>,
) -> AppResult<Json<Employee>> {
    employee::replace_permissions(&state.pool, id, &payload.permission_ids).await?;

    let emp = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(emp))
}
