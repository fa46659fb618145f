//! Task and time log models and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::project::Project;
use crate::models::user::UserSummary;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub assignee_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task with its assignee and project embedded.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithRelations {
    #[serde(flatten)]
    pub task: Task,
    pub assignee: Option<UserSummary>,
    pub project: Option<Project>,
}

/// A task with relations and its logged time.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub assignee: Option<UserSummary>,
    pub project: Option<Project>,
    pub time_logs: Vec<TimeLog>,
}

/// DTO for creating a new task. Status and priority are already resolved
/// to their defaults by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub assignee_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub assignee_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

/// A row from the `time_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeLog {
    pub id: DbId,
    pub task_id: DbId,
    pub user_id: Option<DbId>,
    pub minutes: i32,
    pub note: Option<String>,
    pub logged_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for logging time against a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimeLog {
    pub task_id: DbId,
    pub user_id: Option<DbId>,
    pub minutes: i32,
    pub note: Option<String>,
    /// Defaults to now if omitted.
    pub logged_at: Option<Timestamp>,
}
