//! Lead entity model and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::UserSummary;

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub assignee_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A lead with its assignee embedded.
#[derive(Debug, Clone, Serialize)]
pub struct LeadWithAssignee {
    #[serde(flatten)]
    pub lead: Lead,
    pub assignee: Option<UserSummary>,
}

/// DTO for creating a new lead.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub assignee_id: Option<DbId>,
}

/// DTO for updating an existing lead. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLead {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub assignee_id: Option<DbId>,
    pub status: Option<String>,
    /// `Some(reason)` overwrites the stored reason, `Some(None)` clears it.
    pub rejection_reason: Option<Option<String>>,
}
