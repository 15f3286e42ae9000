//! Permission API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_manage_permissions;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/permissions", get(handler::list))
        .route(
            "/api/employees/{id}/permissions",
            put(handler::replace_for_employee)
                .layer(middleware::from_fn(require_manage_permissions)),
        )
}
