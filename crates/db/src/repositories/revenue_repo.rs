//! Repository for the `revenue` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::Revenue;

const COLUMNS: &str = "id, amount, date, invoice_id, created_at, updated_at";

/// Provides access to recorded revenue.
pub struct RevenueRepo;

impl RevenueRepo {
    /// Record revenue for a paid invoice, dated now.
    ///
    /// Idempotent: returns `false` when the invoice already has revenue.
    pub async fn record_for_invoice(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        invoice_id: DbId,
        amount: f64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO revenue (amount, date, invoice_id)
             VALUES ($1, NOW(), $2)
             ON CONFLICT (invoice_id) DO NOTHING",
        )
        .bind(amount)
        .bind(invoice_id)
        .execute(&mut **tx)
        .await?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            tracing::info!(invoice_id, amount, "Recorded revenue for paid invoice");
        }
        Ok(inserted)
    }

    /// Find the revenue row recorded for an invoice, if any.
    pub async fn find_by_invoice(
        pool: &PgPool,
        invoice_id: DbId,
    ) -> Result<Option<Revenue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM revenue WHERE invoice_id = $1");
        sqlx::query_as::<_, Revenue>(&query)
            .bind(invoice_id)
            .fetch_optional(pool)
            .await
    }
}
