//! Handlers for the `/expenses` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::invoice::validate_expense_amount;
use goat_core::types::{DbId, Timestamp};
use goat_core::validation::{optional_text, require, require_text};
use goat_db::models::expense::{CreateExpense, Expense, UpdateExpense};
use goat_db::repositories::ExpenseRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<Timestamp>,
}

/// POST /api/v1/expenses
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ExpenseRequest>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let description = require_text("description", input.description.as_deref())?;
    let amount = require("amount", input.amount)?;
    validate_expense_amount(amount)?;

    let create = CreateExpense {
        description,
        amount,
        date: input.date,
    };
    let expense = ExpenseRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /api/v1/expenses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let expenses = ExpenseRepo::list(&state.pool).await?;
    Ok(Json(expenses))
}

/// GET /api/v1/expenses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Expense>> {
    let expense = ExpenseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Expense", id))?;
    Ok(Json(expense))
}

/// PUT /api/v1/expenses/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ExpenseRequest>,
) -> AppResult<Json<Expense>> {
    if let Some(amount) = input.amount {
        validate_expense_amount(amount)?;
    }
    let update = UpdateExpense {
        description: optional_text("description", input.description.as_deref())?,
        amount: input.amount,
        date: input.date,
    };
    let expense = ExpenseRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Expense", id))?;
    Ok(Json(expense))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ExpenseRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Expense", id))
    }
}
