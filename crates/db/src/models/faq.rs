//! FAQ entry model and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an FAQ entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
}

/// DTO for updating an FAQ entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
}
