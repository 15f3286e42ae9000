//! Notification API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::Notification;

use crate::core::ServerState;
use crate::db::repository::notification;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /api/notifications — most recent first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = notification::find_recent(&state.pool, query.limit).await?;
    Ok(Json(notifications))
}

/// POST /api/notifications/:id/read — one-way mark-read
pub async fn mark_read(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Notification>> {
    let n = notification::mark_read(&state.pool, id).await?;
    Ok(Json(n))
}
