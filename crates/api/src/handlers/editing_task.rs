//! Handlers for the `/editing-tasks` resource and its review comments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::editing::{
    normalize_files, validate_comment_timestamp, EDITING_STATUS_PENDING, VALID_EDITING_STATUSES,
};
use goat_core::types::DbId;
use goat_core::validation::{
    one_of_or_default, optional_one_of, optional_text, require, require_text,
};
use goat_db::models::editing::{
    Comment, CreateComment, CreateEditingTask, EditingTask, EditingTaskWithComments,
    UpdateEditingTask,
};
use goat_db::repositories::{CommentRepo, EditingTaskRepo};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// `files` is either an array of paths or a string holding one.
#[derive(Debug, Deserialize)]
pub struct EditingTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub files: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: Option<String>,
    pub timestamp: Option<f64>,
}

async fn ensure_task_exists(state: &AppState, id: DbId) -> AppResult<EditingTask> {
    EditingTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("EditingTask", id))
}

// ---------------------------------------------------------------------------
// Editing task CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/editing-tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<EditingTaskRequest>,
) -> AppResult<(StatusCode, Json<EditingTask>)> {
    let create = CreateEditingTask {
        title: require_text("title", input.title.as_deref())?,
        description: input.description,
        status: one_of_or_default(
            "editing status",
            input.status.as_deref(),
            VALID_EDITING_STATUSES,
            EDITING_STATUS_PENDING,
        )?,
        files: normalize_files(input.files.as_ref().unwrap_or(&Value::Null))?,
    };

    let task = EditingTaskRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/editing-tasks
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EditingTaskWithComments>>> {
    let tasks = EditingTaskRepo::list_with_comments(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/editing-tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<EditingTaskWithComments>> {
    let task = EditingTaskRepo::find_with_comments(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("EditingTask", id))?;
    Ok(Json(task))
}

/// PUT /api/v1/editing-tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<EditingTaskRequest>,
) -> AppResult<Json<EditingTask>> {
    optional_one_of("editing status", input.status.as_deref(), VALID_EDITING_STATUSES)?;

    let update = UpdateEditingTask {
        title: optional_text("title", input.title.as_deref())?,
        description: input.description,
        status: input.status,
        files: input.files.as_ref().map(normalize_files).transpose()?,
    };
    let task = EditingTaskRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("EditingTask", id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/editing-tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if EditingTaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("EditingTask", id))
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// GET /api/v1/editing-tasks/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    ensure_task_exists(&state, id).await?;
    let comments = CommentRepo::list_by_task(&state.pool, id).await?;
    Ok(Json(comments))
}

/// POST /api/v1/editing-tasks/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CommentRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let content = require_text("content", input.content.as_deref())?;
    let timestamp = require("timestamp", input.timestamp)?;
    validate_comment_timestamp(timestamp)?;
    ensure_task_exists(&state, id).await?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            editing_task_id: id,
            content,
            timestamp,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /api/v1/editing-tasks/{id}/comments/{comment_id}
///
/// 404 unless the comment belongs to this editing task.
pub async fn delete_comment(
    State(state): State<AppState>,
    AppPath((id, comment_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CommentRepo::delete_for_task(&state.pool, id, comment_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Comment", comment_id))
    }
}
