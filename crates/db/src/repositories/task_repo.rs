//! Repository for the `tasks` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, TaskDetail, TaskWithRelations, UpdateTask};
use crate::repositories::{ProjectRepo, TimeLogRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, priority, due_date, \
    assignee_id, project_id, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (title, description, status, priority, due_date, assignee_id, project_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(input.assignee_id)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a task by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a task with its assignee, project and time logs.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<TaskDetail>, sqlx::Error> {
        let Some(task) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let time_logs = TimeLogRepo::list_by_task(pool, task.id).await?;
        let mut enriched = Self::with_relations(pool, vec![task]).await?;
        Ok(enriched.pop().map(|t| TaskDetail {
            task: t.task,
            assignee: t.assignee,
            project: t.project,
            time_logs,
        }))
    }

    /// List all tasks, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List all tasks, newest first, each with assignee and project.
    pub async fn list_with_relations(pool: &PgPool) -> Result<Vec<TaskWithRelations>, sqlx::Error> {
        let tasks = Self::list(pool).await?;
        Self::with_relations(pool, tasks).await
    }

    /// The most recently created tasks assigned to a user.
    pub async fn list_recent_for_assignee(
        pool: &PgPool,
        assignee_id: DbId,
        limit: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE assignee_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(assignee_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                due_date = COALESCE($6, due_date),
                assignee_id = COALESCE($7, assignee_id),
                project_id = COALESCE($8, project_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(input.assignee_id)
            .bind(input.project_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a task's status. Returns `None` if the task does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("UPDATE tasks SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Its time logs are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach assignee and project to each task with one query per relation.
    async fn with_relations(
        pool: &PgPool,
        tasks: Vec<Task>,
    ) -> Result<Vec<TaskWithRelations>, sqlx::Error> {
        let assignee_ids: Vec<DbId> = tasks.iter().filter_map(|t| t.assignee_id).collect();
        let project_ids: Vec<DbId> = tasks.iter().filter_map(|t| t.project_id).collect();

        let users = UserRepo::summaries_by_ids(pool, &assignee_ids).await?;
        let projects = ProjectRepo::find_by_ids(pool, &project_ids).await?;

        Ok(tasks
            .into_iter()
            .map(|task| TaskWithRelations {
                assignee: task.assignee_id.and_then(|id| users.get(&id).cloned()),
                project: task.project_id.and_then(|id| projects.get(&id).cloned()),
                task,
            })
            .collect())
    }
}
