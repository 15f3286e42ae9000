//! Notification Model
//!
//! Append-only feed of human-readable records emitted by mutating domain
//! operations. The only mutation ever applied is mark-read (one-way).

use serde::{Deserialize, Serialize};

/// Notification severity/type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub kind: NotificationType,
    pub read: bool,
    /// Optional target user
    pub user_id: Option<i64>,
    pub created_at: i64,
}

/// Create notification payload (`read` always starts false)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreate {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub user_id: Option<i64>,
}
