//! Session Actor API Handlers

use axum::{Extension, Json};
use shared::models::User;

use crate::auth::CurrentUser;
use crate::utils::AppResult;

/// The actor this session operates as
pub async fn me(Extension(user): Extension<CurrentUser>) -> AppResult<Json<User>> {
    Ok(Json((*user.0).clone()))
}
