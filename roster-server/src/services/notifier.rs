//! Notification Side-Effect Policy
//!
//! Every mutating domain operation appends exactly one notification row,
//! awaited before the operation returns. The title/type pairs below are
//! the complete policy; shift updates and permission/department changes
//! intentionally emit nothing.

use shared::models::{Notification, NotificationCreate, NotificationType};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, notification};

async fn push(
    pool: &SqlitePool,
    kind: NotificationType,
    title: &str,
    message: String,
) -> RepoResult<Notification> {
    notification::insert(
        pool,
        NotificationCreate {
            title: title.to_string(),
            message,
            kind,
            user_id: None,
        },
    )
    .await
}

pub async fn employee_added(pool: &SqlitePool, name: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Success,
        "Employee Added",
        format!("{name} has been added to the system"),
    )
    .await
}

pub async fn employee_updated(pool: &SqlitePool) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Info,
        "Employee Updated",
        "Employee information has been updated".to_string(),
    )
    .await
}

pub async fn employee_removed(pool: &SqlitePool, name: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Warning,
        "Employee Removed",
        format!("{name} has been removed from the system"),
    )
    .await
}

pub async fn shift_created(pool: &SqlitePool, employee_name: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Success,
        "Shift Created",
        format!("New shift assigned to {employee_name}"),
    )
    .await
}

pub async fn shift_cancelled(pool: &SqlitePool, employee_name: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Warning,
        "Shift Cancelled",
        format!("Shift for {employee_name} has been cancelled"),
    )
    .await
}

pub async fn clocked_in(pool: &SqlitePool, name: &str, time: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Success,
        "Clocked In",
        format!("{name} clocked in at {time}"),
    )
    .await
}

pub async fn already_clocked_in(pool: &SqlitePool, name: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Warning,
        "Already Clocked In",
        format!("{name} is already clocked in"),
    )
    .await
}

pub async fn clocked_out(pool: &SqlitePool, name: &str, time: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Success,
        "Clocked Out",
        format!("{name} clocked out at {time}"),
    )
    .await
}

pub async fn not_clocked_in(pool: &SqlitePool, name: &str) -> RepoResult<Notification> {
    push(
        pool,
        NotificationType::Warning,
        "Not Clocked In",
        format!("{name} is not currently clocked in"),
    )
    .await
}
