//! Repository for the `notifications` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification, NotificationFilter};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, message, category, read, created_at, updated_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create an unread notification for a user.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, message, category) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(&input.message)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// List notifications, newest first.
    ///
    /// `user_id` narrows to one recipient when set; `unread_only` drops
    /// notifications already read.
    pub async fn list(
        pool: &PgPool,
        filter: &NotificationFilter,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
               AND (NOT $2 OR read = false) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(filter.user_id)
            .bind(filter.unread_only)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Set the read flag. Returns `None` if the notification does not exist.
    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        read: bool,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET read = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(read)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
