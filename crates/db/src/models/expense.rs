//! Expense entity model and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub description: String,
    pub amount: f64,
    pub date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub amount: f64,
    /// Defaults to now if omitted.
    pub date: Option<Timestamp>,
}

/// DTO for updating an expense. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<Timestamp>,
}
