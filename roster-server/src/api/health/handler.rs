//! Health API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub environment: String,
}

/// Liveness probe; also verifies the pool can serve a connection
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<Health>> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| crate::utils::AppError::database(e.to_string()))?;

    Ok(Json(Health {
        status: "ok",
        environment: state.config.environment.clone(),
    }))
}
