//! Shift API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Shift, ShiftCreate, ShiftUpdate};

use crate::core::ServerState;
use crate::db::repository::{employee, shift};
use crate::services::notifier;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, time};

/// Query params for listing shifts
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/shifts — full calendar, optionally narrowed to a date range
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Shift>>> {
    let shifts = if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        time::parse_date(&start)?;
        time::parse_date(&end)?;
        shift::find_by_date_range(&state.pool, &start, &end).await
    } else {
        shift::find_all(&state.pool).await
    }?;

    Ok(Json(shifts))
}

/// GET /api/shifts/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Shift>> {
    let s = shift::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Shift {id} not found")))?;
    Ok(Json(s))
}

/// POST /api/shifts — assign a shift
///
/// Times are validated for format only; start-before-end ordering and
/// overlap with the employee's other shifts are not checked.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShiftCreate>,
) -> AppResult<Json<Shift>> {
    time::parse_date(&payload.date)?;
    time::parse_wall_clock(&payload.start_time)?;
    time::parse_wall_clock(&payload.end_time)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let emp = employee::find_by_id(&state.pool, payload.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Employee {} not found", payload.employee_id))
        })?;

    let s = shift::create(&state.pool, payload).await?;

    notifier::shift_created(&state.pool, &emp.name).await?;

    Ok(Json(s))
}

/// PUT /api/shifts/:id — update a shift
///
/// Deliberately emits no notification, unlike every other shift mutation.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShiftUpdate>,
) -> AppResult<Json<Shift>> {
    if let Some(ref start) = payload.start_time {
        time::parse_wall_clock(start)?;
    }
    if let Some(ref end) = payload.end_time {
        time::parse_wall_clock(end)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let s = shift::update(&state.pool, id, payload).await?;

    Ok(Json(s))
}

/// DELETE /api/shifts/:id — cancel a shift
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let s = shift::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Shift {id} not found")))?;

    let result = shift::delete(&state.pool, id).await?;

    notifier::shift_cancelled(&state.pool, &s.employee_name).await?;

    Ok(Json(result))
}
