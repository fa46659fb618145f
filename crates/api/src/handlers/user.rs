//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::roles::{DEFAULT_ROLE, VALID_ROLES};
use goat_core::types::DbId;
use goat_core::validation::{
    one_of_or_default, optional_one_of, optional_text, require_text, validate_email,
};
use goat_db::models::user::{CreateUser, UpdateUser, User, UserDetail, UserWithTaskCount};
use goat_db::repositories::{LeadRepo, TaskRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// How many tasks and leads the user detail view embeds.
const RECENT_ITEMS_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let email = require_text("email", input.email.as_deref())?;
    validate_email(&email)?;
    let name = require_text("name", input.name.as_deref())?;
    let role = one_of_or_default("role", input.role.as_deref(), VALID_ROLES, DEFAULT_ROLE)?;

    let user = UserRepo::create(&state.pool, &CreateUser { email, name, role }).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserWithTaskCount>>> {
    let users = UserRepo::list_with_task_count(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
///
/// Embeds the user's most recent tasks and assigned leads.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UserDetail>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

    let tasks = TaskRepo::list_recent_for_assignee(&state.pool, id, RECENT_ITEMS_LIMIT).await?;
    let leads_assigned =
        LeadRepo::list_recent_for_assignee(&state.pool, id, RECENT_ITEMS_LIMIT).await?;

    Ok(Json(UserDetail {
        user,
        tasks,
        leads_assigned,
    }))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let email = optional_text("email", input.email.as_deref())?;
    if let Some(email) = &email {
        validate_email(email)?;
    }
    let name = optional_text("name", input.name.as_deref())?;
    optional_one_of("role", input.role.as_deref(), VALID_ROLES)?;

    let update = UpdateUser {
        email,
        name,
        role: input.role,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("User", id))
    }
}
