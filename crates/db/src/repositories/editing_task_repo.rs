//! Repository for the `editing_tasks` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::editing::{
    CreateEditingTask, EditingTask, EditingTaskWithComments, UpdateEditingTask,
};
use crate::repositories::CommentRepo;

const COLUMNS: &str = "id, title, description, status, files, created_at, updated_at";

/// Provides CRUD operations for editing tasks.
pub struct EditingTaskRepo;

impl EditingTaskRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateEditingTask,
    ) -> Result<EditingTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO editing_tasks (title, description, status, files)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EditingTask>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.files)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EditingTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM editing_tasks WHERE id = $1");
        sqlx::query_as::<_, EditingTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an editing task with its comments, oldest first.
    pub async fn find_with_comments(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EditingTaskWithComments>, sqlx::Error> {
        let Some(task) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let comments = CommentRepo::list_by_task(pool, task.id).await?;
        Ok(Some(EditingTaskWithComments { task, comments }))
    }

    /// List editing tasks, newest first, each with its comments.
    pub async fn list_with_comments(
        pool: &PgPool,
    ) -> Result<Vec<EditingTaskWithComments>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM editing_tasks ORDER BY created_at DESC, id DESC");
        let tasks = sqlx::query_as::<_, EditingTask>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = tasks.iter().map(|t| t.id).collect();
        let mut comments = CommentRepo::list_by_tasks(pool, &ids).await?;

        Ok(tasks
            .into_iter()
            .map(|task| EditingTaskWithComments {
                comments: comments.remove(&task.id).unwrap_or_default(),
                task,
            })
            .collect())
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEditingTask,
    ) -> Result<Option<EditingTask>, sqlx::Error> {
        let query = format!(
            "UPDATE editing_tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                files = COALESCE($5, files)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EditingTask>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.files)
            .fetch_optional(pool)
            .await
    }

    /// Delete an editing task. Comments are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM editing_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
