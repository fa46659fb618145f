//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::types::DbId;
use goat_core::validation::{optional_text, require_text};
use goat_db::models::project::{CreateProject, Project, UpdateProject};
use goat_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let create = CreateProject {
        name: require_text("name", input.name.as_deref())?,
        description: input.description,
    };
    let project = ProjectRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ProjectRequest>,
) -> AppResult<Json<Project>> {
    let update = UpdateProject {
        name: optional_text("name", input.name.as_deref())?,
        description: input.description,
    };
    let project = ProjectRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}
