//! Repository for the `comments` table.

use std::collections::HashMap;

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::editing::{Comment, CreateComment};

const COLUMNS: &str = "id, editing_task_id, content, timestamp, created_at, updated_at";

/// Provides operations for review comments on editing tasks.
pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (editing_task_id, content, timestamp)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.editing_task_id)
            .bind(&input.content)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }

    /// List a task's comments in the order they were written.
    pub async fn list_by_task(
        pool: &PgPool,
        editing_task_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE editing_task_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(editing_task_id)
            .fetch_all(pool)
            .await
    }

    /// Load comments for a set of editing tasks, grouped by task ID.
    pub async fn list_by_tasks(
        pool: &PgPool,
        task_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<Comment>>, sqlx::Error> {
        if task_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE editing_task_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, Comment>(&query)
            .bind(task_ids)
            .fetch_all(pool)
            .await?;

        let mut grouped: HashMap<DbId, Vec<Comment>> = HashMap::new();
        for comment in rows {
            grouped.entry(comment.editing_task_id).or_default().push(comment);
        }
        Ok(grouped)
    }

    /// Delete a comment only if it belongs to the given editing task.
    pub async fn delete_for_task(
        pool: &PgPool,
        editing_task_id: DbId,
        comment_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND editing_task_id = $2")
            .bind(comment_id)
            .bind(editing_task_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
