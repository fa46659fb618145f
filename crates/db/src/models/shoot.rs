//! Shoot and shoot assignment models and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::client::Client;
use crate::models::user::UserSummary;

/// A row from the `shoots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shoot {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub location: Option<String>,
    pub status: String,
    pub client_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `shoot_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShootAssignment {
    pub id: DbId,
    pub shoot_id: DbId,
    pub user_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An assignment with the assigned user's summary.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithUser {
    #[serde(flatten)]
    pub assignment: ShootAssignment,
    pub user: Option<UserSummary>,
}

/// A shoot with its client and crew embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ShootWithRelations {
    #[serde(flatten)]
    pub shoot: Shoot,
    pub client: Option<Client>,
    pub assignments: Vec<AssignmentWithUser>,
}

/// DTO for creating a new shoot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShoot {
    pub title: String,
    pub description: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub location: Option<String>,
    pub status: String,
    pub client_id: Option<DbId>,
}

/// DTO for updating an existing shoot. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateShoot {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub client_id: Option<DbId>,
}

/// DTO for assigning a team member to a shoot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShootAssignment {
    pub shoot_id: DbId,
    pub user_id: DbId,
    pub role: String,
}
