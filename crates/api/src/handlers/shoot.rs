//! Handlers for the `/shoots` resource, team assignments and approvals.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::shoot::{
    validate_approval_decision, validate_shoot_window, SHOOT_STATUS_PENDING,
    VALID_SHOOT_STATUSES,
};
use goat_core::types::{DbId, Timestamp};
use goat_core::validation::{
    one_of_or_default, optional_one_of, optional_text, require, require_text,
};
use goat_db::models::shoot::{
    CreateShoot, CreateShootAssignment, Shoot, ShootAssignment, ShootWithRelations, UpdateShoot,
};
use goat_db::repositories::{ShootAssignmentRepo, ShootRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ShootRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub client_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct AssignTeamRequest {
    pub user_id: Option<DbId>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Shoot CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/shoots
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ShootRequest>,
) -> AppResult<(StatusCode, Json<Shoot>)> {
    let title = require_text("title", input.title.as_deref())?;
    let start_time = require("start_time", input.start_time)?;
    let end_time = require("end_time", input.end_time)?;
    validate_shoot_window(start_time, end_time)?;

    let create = CreateShoot {
        title,
        description: input.description,
        start_time,
        end_time,
        location: input.location,
        status: one_of_or_default(
            "shoot status",
            input.status.as_deref(),
            VALID_SHOOT_STATUSES,
            SHOOT_STATUS_PENDING,
        )?,
        client_id: input.client_id,
    };

    let shoot = ShootRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(shoot)))
}

/// GET /api/v1/shoots
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShootWithRelations>>> {
    let shoots = ShootRepo::list_with_relations(&state.pool).await?;
    Ok(Json(shoots))
}

/// GET /api/v1/shoots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ShootWithRelations>> {
    let shoot = ShootRepo::find_with_relations(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shoot", id))?;
    Ok(Json(shoot))
}

/// PUT /api/v1/shoots/{id}
///
/// The time window is checked against the stored values for whichever
/// bound the request leaves out.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ShootRequest>,
) -> AppResult<Json<Shoot>> {
    optional_one_of("shoot status", input.status.as_deref(), VALID_SHOOT_STATUSES)?;
    let title = optional_text("title", input.title.as_deref())?;

    let existing = ShootRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shoot", id))?;
    validate_shoot_window(
        input.start_time.unwrap_or(existing.start_time),
        input.end_time.unwrap_or(existing.end_time),
    )?;

    let update = UpdateShoot {
        title,
        description: input.description,
        start_time: input.start_time,
        end_time: input.end_time,
        location: input.location,
        status: input.status,
        client_id: input.client_id,
    };
    let shoot = ShootRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Shoot", id))?;
    Ok(Json(shoot))
}

/// DELETE /api/v1/shoots/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ShootRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Shoot", id))
    }
}

// ---------------------------------------------------------------------------
// Team and approval
// ---------------------------------------------------------------------------

/// POST /api/v1/shoots/{id}/assign-team
///
/// A user can hold one assignment per shoot; a second one is a 409.
pub async fn assign_team(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AssignTeamRequest>,
) -> AppResult<(StatusCode, Json<ShootAssignment>)> {
    let user_id = require("user_id", input.user_id)?;
    let role = require_text("role", input.role.as_deref())?;

    ShootRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shoot", id))?;

    let assignment = ShootAssignmentRepo::create(
        &state.pool,
        &CreateShootAssignment {
            shoot_id: id,
            user_id,
            role,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// DELETE /api/v1/shoots/{id}/assignments/{user_id}
pub async fn remove_assignment(
    State(state): State<AppState>,
    AppPath((id, user_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if ShootAssignmentRepo::delete(&state.pool, id, user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ShootAssignment", user_id))
    }
}

/// PUT /api/v1/shoots/{id}/approval
pub async fn set_approval(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ApprovalRequest>,
) -> AppResult<Json<Shoot>> {
    let status = validate_approval_decision(input.status.as_deref())?;

    let shoot = ShootRepo::set_status(&state.pool, id, &status)
        .await?
        .ok_or_else(|| AppError::not_found("Shoot", id))?;

    tracing::info!(shoot_id = id, status = %shoot.status, "Shoot approval decided");
    Ok(Json(shoot))
}
