//! Session actor and permission guards
//!
//! Access checks are permission-name matching only; the admin role
//! satisfies every check by construction of [`Role`]. Guards run as
//! route-level middleware over the `CurrentUser` extension installed by
//! the top-level router.
//!
//! [`Role`]: shared::models::Role

use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::Response};
use shared::models::User;

use crate::utils::AppError;

// Permission names gating the write surfaces
pub const MANAGE_EMPLOYEES: &str = "manage_employees";
pub const MANAGE_SCHEDULE: &str = "manage_schedule";
pub const MANAGE_PERMISSIONS: &str = "manage_permissions";

/// Current-session actor, shared via request extension
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Arc<User>);

impl CurrentUser {
    pub fn allows(&self, permission: &str) -> bool {
        self.0.role.allows(permission)
    }
}

fn check(req: &Request, permission: &str) -> Result<(), AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;
    if user.allows(permission) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Missing permission: {permission}"
        )))
    }
}

pub async fn require_manage_employees(req: Request, next: Next) -> Result<Response, AppError> {
    check(&req, MANAGE_EMPLOYEES)?;
    Ok(next.run(req).await)
}

pub async fn require_manage_schedule(req: Request, next: Next) -> Result<Response, AppError> {
    check(&req, MANAGE_SCHEDULE)?;
    Ok(next.run(req).await)
}

pub async fn require_manage_permissions(req: Request, next: Next) -> Result<Response, AppError> {
    check(&req, MANAGE_PERMISSIONS)?;
    Ok(next.run(req).await)
}
