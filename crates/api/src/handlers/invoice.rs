//! Handlers for the `/invoices` resource.
//!
//! Paying an invoice (on create or update) records its revenue row inside
//! the same transaction; see `goat_db::repositories::InvoiceRepo`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::invoice::{
    validate_invoice_amount, INVOICE_STATUS_UNPAID, VALID_INVOICE_STATUSES,
};
use goat_core::types::{DbId, Timestamp};
use goat_core::validation::{one_of_or_default, optional_one_of, require};
use goat_db::models::invoice::{
    CreateInvoice, Invoice, InvoiceDetail, InvoiceWithClient, UpdateInvoice,
};
use goat_db::repositories::InvoiceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InvoiceRequest {
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub due_date: Option<Timestamp>,
    pub client_id: Option<DbId>,
}

/// POST /api/v1/invoices
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<InvoiceRequest>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    let amount = require("amount", input.amount)?;
    validate_invoice_amount(amount)?;

    let create = CreateInvoice {
        amount,
        status: one_of_or_default(
            "invoice status",
            input.status.as_deref(),
            VALID_INVOICE_STATUSES,
            INVOICE_STATUS_UNPAID,
        )?,
        due_date: require("due_date", input.due_date)?,
        client_id: require("client_id", input.client_id)?,
    };

    let invoice = InvoiceRepo::create(&state.pool, &create).await?;
    tracing::info!(invoice_id = invoice.id, status = %invoice.status, "Invoice created");
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET /api/v1/invoices
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InvoiceWithClient>>> {
    let invoices = InvoiceRepo::list_with_client(&state.pool).await?;
    Ok(Json(invoices))
}

/// GET /api/v1/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<InvoiceDetail>> {
    let invoice = InvoiceRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice", id))?;
    Ok(Json(invoice))
}

/// PUT /api/v1/invoices/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<InvoiceRequest>,
) -> AppResult<Json<Invoice>> {
    if let Some(amount) = input.amount {
        validate_invoice_amount(amount)?;
    }
    optional_one_of("invoice status", input.status.as_deref(), VALID_INVOICE_STATUSES)?;

    let update = UpdateInvoice {
        amount: input.amount,
        status: input.status,
        due_date: input.due_date,
        client_id: input.client_id,
    };
    let invoice = InvoiceRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice", id))?;
    Ok(Json(invoice))
}

/// DELETE /api/v1/invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if InvoiceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Invoice", id))
    }
}
