//! Notification entity model and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub category: String,
    pub read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub message: String,
    pub category: String,
}

/// Filters for listing notifications. Limit and offset are already clamped.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub user_id: Option<DbId>,
    pub unread_only: bool,
    pub limit: i64,
    pub offset: i64,
}
