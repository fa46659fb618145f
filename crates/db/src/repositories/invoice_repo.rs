//! Repository for the `invoices` table.
//!
//! Every write that leaves an invoice `PAID` also ensures its revenue row,
//! inside the same transaction.

use goat_core::invoice::records_revenue;
use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{
    CreateInvoice, Invoice, InvoiceDetail, InvoiceWithClient, UpdateInvoice,
};
use crate::repositories::{ClientRepo, RevenueRepo};

const COLUMNS: &str = "id, amount, status, due_date, client_id, created_at, updated_at";

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, recording revenue when it is created as paid.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO invoices (amount, status, due_date, client_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let invoice = sqlx::query_as::<_, Invoice>(&query)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(input.client_id)
            .fetch_one(&mut *tx)
            .await?;

        if records_revenue(&invoice.status) {
            RevenueRepo::record_for_invoice(&mut tx, invoice.id, invoice.amount).await?;
        }

        tx.commit().await?;
        Ok(invoice)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an invoice with its client and revenue row.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InvoiceDetail>, sqlx::Error> {
        let Some(invoice) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let client = ClientRepo::find_by_id(pool, invoice.client_id).await?;
        let revenue = RevenueRepo::find_by_invoice(pool, invoice.id).await?;
        Ok(Some(InvoiceDetail {
            invoice,
            client,
            revenue,
        }))
    }

    /// List all invoices by due date, latest first, each with its client.
    pub async fn list_with_client(pool: &PgPool) -> Result<Vec<InvoiceWithClient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices ORDER BY due_date DESC, id DESC");
        let invoices = sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await?;

        let client_ids: Vec<DbId> = invoices.iter().map(|i| i.client_id).collect();
        let clients = ClientRepo::find_by_ids(pool, &client_ids).await?;

        Ok(invoices
            .into_iter()
            .map(|invoice| InvoiceWithClient {
                client: clients.get(&invoice.client_id).cloned(),
                invoice,
            })
            .collect())
    }

    /// Update an invoice. Only non-`None` fields in `input` are applied.
    ///
    /// If the resulting status is `PAID`, the revenue row is created unless it
    /// already exists. Leaving `PAID` does not remove revenue.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE invoices SET
                amount = COALESCE($2, amount),
                status = COALESCE($3, status),
                due_date = COALESCE($4, due_date),
                client_id = COALESCE($5, client_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let invoice = sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(input.client_id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref invoice) = invoice {
            if records_revenue(&invoice.status) {
                RevenueRepo::record_for_invoice(&mut tx, invoice.id, invoice.amount).await?;
            }
        }

        tx.commit().await?;
        Ok(invoice)
    }

    /// Delete an invoice. Its revenue row is removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
