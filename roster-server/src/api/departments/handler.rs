//! Department API Handlers
//!
//! Department changes emit no notification.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{Department, DepartmentCreate};

use crate::core::ServerState;
use crate::db::repository::department;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let departments = department::find_all(&state.pool).await?;
    Ok(Json(departments))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Department>> {
    let dept = department::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(dept))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let dept = department::create(&state.pool, payload).await?;
    Ok(Json(dept))
}

#[derive(Debug, Deserialize)]
pub struct RenamePayload {
    pub name: String,
}

/// Rename a department; employees and shifts reflect the new name on
/// their next read through the join.
pub async fn rename(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RenamePayload>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let dept = department::rename(&state.pool, id, &payload.name).await?;
    Ok(Json(dept))
}
