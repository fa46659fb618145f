//! User entity model and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::lead::Lead;
use crate::models::task::Task;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The compact user shape embedded in tasks, leads and shoot assignments.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// A user with the number of tasks assigned to them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserWithTaskCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: User,
    pub task_count: i64,
}

/// A user enriched with their most recent tasks and assigned leads.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub tasks: Vec<Task>,
    pub leads_assigned: Vec<Lead>,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}
