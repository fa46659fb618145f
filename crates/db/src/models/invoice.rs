//! Invoice and revenue models and DTOs.

use goat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::client::Client;

/// A row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub amount: f64,
    pub status: String,
    pub due_date: Timestamp,
    pub client_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `revenue` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Revenue {
    pub id: DbId,
    pub amount: f64,
    pub date: Timestamp,
    pub invoice_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An invoice with its client embedded.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceWithClient {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub client: Option<Client>,
}

/// An invoice with its client and recorded revenue.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub client: Option<Client>,
    pub revenue: Option<Revenue>,
}

/// DTO for creating a new invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub amount: f64,
    pub status: String,
    pub due_date: Timestamp,
    pub client_id: DbId,
}

/// DTO for updating an existing invoice. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvoice {
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub due_date: Option<Timestamp>,
    pub client_id: Option<DbId>,
}
