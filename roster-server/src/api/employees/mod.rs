//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_manage_employees;
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // Read routes: viewing the roster is a baseline operation
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    // Manage routes: gated on manage_employees
    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_manage_employees));

    read_routes.merge(manage_routes)
}
