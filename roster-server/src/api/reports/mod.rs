//! Reports API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/overview", get(handler::overview))
        .route("/departments", get(handler::departments))
        .route("/attendance-week", get(handler::attendance_week))
}
