//! Time Entry API Handlers
//!
//! Clock-in/clock-out delegate to the time-clock service; the
//! "already clocked in" / "not clocked in" cases are business outcomes
//! carried in the response body, not errors.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::TimeEntry;

use crate::core::ServerState;
use crate::db::repository::time_entry;
use crate::services::{ClockInOutcome, ClockOutOutcome};
use crate::utils::{AppResult, time};

/// Query params for listing time entries
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

/// GET /api/time-entries — newest first, optionally one calendar day
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<TimeEntry>>> {
    let entries = if let Some(date) = query.date {
        time::parse_date(&date)?;
        time_entry::find_by_date(&state.pool, &date).await
    } else {
        time_entry::find_all(&state.pool).await
    }?;

    Ok(Json(entries))
}

#[derive(Debug, Deserialize)]
pub struct ClockPayload {
    pub employee_id: i64,
}

/// POST /api/time-entries/clock-in
pub async fn clock_in(
    State(state): State<ServerState>,
    Json(payload): Json<ClockPayload>,
) -> AppResult<Json<ClockInOutcome>> {
    let outcome = state.time_clock().clock_in(payload.employee_id).await?;
    Ok(Json(outcome))
}

/// POST /api/time-entries/clock-out
pub async fn clock_out(
    State(state): State<ServerState>,
    Json(payload): Json<ClockPayload>,
) -> AppResult<Json<ClockOutOutcome>> {
    let outcome = state.time_clock().clock_out(payload.employee_id).await?;
    Ok(Json(outcome))
}
