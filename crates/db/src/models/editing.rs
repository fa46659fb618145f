//! Editing task and review comment models and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `editing_tasks` table.
///
/// `files` is always a JSON array of file path strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EditingTask {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub files: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub editing_task_id: DbId,
    pub content: String,
    /// Position in the media, in seconds.
    pub timestamp: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An editing task with its comments in chronological order.
#[derive(Debug, Clone, Serialize)]
pub struct EditingTaskWithComments {
    #[serde(flatten)]
    pub task: EditingTask,
    pub comments: Vec<Comment>,
}

/// DTO for creating an editing task. `files` must already be normalised.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEditingTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub files: serde_json::Value,
}

/// DTO for updating an editing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEditingTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub files: Option<serde_json::Value>,
}

/// DTO for adding a review comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub editing_task_id: DbId,
    pub content: String,
    pub timestamp: f64,
}
