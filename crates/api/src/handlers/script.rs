//! Handlers for the `/scripts` resource and its versions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::script::INITIAL_VERSION_CONTENT;
use goat_core::types::DbId;
use goat_core::validation::{require, require_text};
use goat_db::models::script::{Script, ScriptVersion, ScriptWithVersions};
use goat_db::repositories::{ScriptRepo, ScriptVersionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateScriptRequest {
    pub title: Option<String>,
    pub initial_content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateScriptRequest {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVersionRequest {
    pub content: Option<String>,
}

/// POST /api/v1/scripts
///
/// Creates the script together with version 1.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateScriptRequest>,
) -> AppResult<(StatusCode, Json<ScriptWithVersions>)> {
    let title = require_text("title", input.title.as_deref())?;
    let content = input
        .initial_content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(INITIAL_VERSION_CONTENT);

    let script = ScriptRepo::create_with_initial_version(&state.pool, &title, content).await?;
    Ok((StatusCode::CREATED, Json(script)))
}

/// GET /api/v1/scripts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ScriptWithVersions>>> {
    let scripts = ScriptRepo::list_with_versions(&state.pool).await?;
    Ok(Json(scripts))
}

/// GET /api/v1/scripts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ScriptWithVersions>> {
    let script = ScriptRepo::find_with_versions(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Script", id))?;
    Ok(Json(script))
}

/// PUT /api/v1/scripts/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateScriptRequest>,
) -> AppResult<Json<Script>> {
    let title = require_text("title", input.title.as_deref())?;
    let script = ScriptRepo::update_title(&state.pool, id, &title)
        .await?
        .ok_or_else(|| AppError::not_found("Script", id))?;
    Ok(Json(script))
}

/// DELETE /api/v1/scripts/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ScriptRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Script", id))
    }
}

/// GET /api/v1/scripts/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<ScriptVersion>>> {
    ScriptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Script", id))?;
    let versions = ScriptVersionRepo::list_by_script(&state.pool, id).await?;
    Ok(Json(versions))
}

/// POST /api/v1/scripts/{id}/versions
///
/// Numbers the new version one past the latest and bumps the script's
/// `updated_at`.
pub async fn create_version(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateVersionRequest>,
) -> AppResult<(StatusCode, Json<ScriptVersion>)> {
    // Content is stored verbatim; only a blank body is rejected.
    let content = require(
        "content",
        input.content.filter(|c| !c.trim().is_empty()),
    )?;
    let version = ScriptVersionRepo::create_next(&state.pool, id, &content)
        .await?
        .ok_or_else(|| AppError::not_found("Script", id))?;
    Ok((StatusCode::CREATED, Json(version)))
}
