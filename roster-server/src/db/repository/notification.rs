//! Notification Repository
//!
//! Append-only feed; mark-read is the only mutation.

use shared::models::{Notification, NotificationCreate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const SELECT: &str =
    "SELECT id, title, message, type, read, user_id, created_at FROM notifications";

/// Most recent notifications, newest first
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Notification>> {
    let notifications =
        sqlx::query_as::<_, Notification>(&format!("{SELECT} ORDER BY created_at DESC LIMIT ?"))
            .bind(limit)
            .fetch_all(pool)
            .await?;
    Ok(notifications)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Notification>> {
    let notification = sqlx::query_as::<_, Notification>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(notification)
}

pub async fn insert(pool: &SqlitePool, data: NotificationCreate) -> RepoResult<Notification> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO notifications (id, title, message, type, read, user_id, created_at) \
         VALUES (?, ?, ?, ?, 0, ?, ?)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.message)
    .bind(data.kind)
    .bind(data.user_id)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create notification".into()))
}

/// Mark a notification read (one-way; marking twice is a no-op)
pub async fn mark_read(pool: &SqlitePool, id: i64) -> RepoResult<Notification> {
    let rows = sqlx::query("UPDATE notifications SET read = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if rows == 0 {
        return Err(RepoError::NotFound(format!("Notification {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Notification {id} not found")))
}
