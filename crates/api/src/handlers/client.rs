//! Handlers for the `/clients` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::types::DbId;
use goat_core::validation::{optional_text, require_text, validate_email};
use goat_db::models::client::{Client, CreateClient, UpdateClient};
use goat_db::repositories::ClientRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Body shared by create and update; `name` is only required on create.
#[derive(Debug, Deserialize)]
pub struct ClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

fn checked_email(email: Option<String>) -> AppResult<Option<String>> {
    if let Some(email) = &email {
        validate_email(email)?;
    }
    Ok(email)
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ClientRequest>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let create = CreateClient {
        name: require_text("name", input.name.as_deref())?,
        email: checked_email(input.email)?,
        phone: input.phone,
    };
    let client = ClientRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client", id))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ClientRequest>,
) -> AppResult<Json<Client>> {
    let update = UpdateClient {
        name: optional_text("name", input.name.as_deref())?,
        email: checked_email(input.email)?,
        phone: input.phone,
    };
    let client = ClientRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Client", id))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Client", id))
    }
}
