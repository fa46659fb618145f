//! Repository for the `time_logs` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTimeLog, TimeLog};

const COLUMNS: &str = "id, task_id, user_id, minutes, note, logged_at, created_at, updated_at";

/// Provides operations for time logged against tasks.
pub struct TimeLogRepo;

impl TimeLogRepo {
    /// Record time against a task. `logged_at` defaults to now.
    pub async fn create(pool: &PgPool, input: &CreateTimeLog) -> Result<TimeLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_logs (task_id, user_id, minutes, note, logged_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeLog>(&query)
            .bind(input.task_id)
            .bind(input.user_id)
            .bind(input.minutes)
            .bind(&input.note)
            .bind(input.logged_at)
            .fetch_one(pool)
            .await
    }

    /// List a task's time logs, most recent first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<TimeLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM time_logs
             WHERE task_id = $1
             ORDER BY logged_at DESC, id DESC"
        );
        sqlx::query_as::<_, TimeLog>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }
}
