//! API routing
//!
//! One module per resource area, each exposing a `router()` nested under
//! `/api/...`:
//!
//! - [`health`] — liveness probe
//! - [`me`] — current-session actor
//! - [`employees`] — employee management
//! - [`departments`] — department management
//! - [`permissions`] — permission catalog and grants
//! - [`shifts`] — shift calendar
//! - [`time_entries`] — time clock
//! - [`notifications`] — notification feed
//! - [`reports`] — derived metrics

pub mod departments;
pub mod employees;
pub mod health;
pub mod me;
pub mod notifications;
pub mod permissions;
pub mod reports;
pub mod shifts;
pub mod time_entries;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::CurrentUser;
use crate::core::ServerState;

/// Compose the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(me::router())
        .merge(employees::router())
        .merge(departments::router())
        .merge(permissions::router())
        .merge(shifts::router())
        .merge(time_entries::router())
        .merge(notifications::router())
        .merge(reports::router())
        .layer(Extension(CurrentUser(state.current_user.clone())))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
