//! Handlers for the `/tasks` resource and its time logs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::task::{
    validate_task_status, validate_time_log_minutes, PRIORITY_MEDIUM, TASK_STATUS_PENDING,
    VALID_PRIORITIES, VALID_TASK_STATUSES,
};
use goat_core::types::{DbId, Timestamp};
use goat_core::validation::{
    one_of_or_default, optional_one_of, optional_text, require, require_text,
};
use goat_db::models::task::{
    CreateTask, CreateTimeLog, Task, TaskDetail, TaskWithRelations, TimeLog, UpdateTask,
};
use goat_db::repositories::{TaskRepo, TimeLogRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body for create and partial update.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub assignee_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct TaskStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimeLogRequest {
    pub minutes: Option<i32>,
    pub user_id: Option<DbId>,
    pub note: Option<String>,
    pub logged_at: Option<Timestamp>,
}

async fn ensure_task_exists(state: &AppState, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))
}

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<TaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let create = CreateTask {
        title: require_text("title", input.title.as_deref())?,
        description: input.description,
        status: one_of_or_default(
            "task status",
            input.status.as_deref(),
            VALID_TASK_STATUSES,
            TASK_STATUS_PENDING,
        )?,
        priority: one_of_or_default(
            "priority",
            input.priority.as_deref(),
            VALID_PRIORITIES,
            PRIORITY_MEDIUM,
        )?,
        due_date: input.due_date,
        assignee_id: input.assignee_id,
        project_id: input.project_id,
    };

    let task = TaskRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TaskWithRelations>>> {
    let tasks = TaskRepo::list_with_relations(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TaskDetail>> {
    let task = TaskRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TaskRequest>,
) -> AppResult<Json<Task>> {
    optional_one_of("task status", input.status.as_deref(), VALID_TASK_STATUSES)?;
    optional_one_of("priority", input.priority.as_deref(), VALID_PRIORITIES)?;

    let update = UpdateTask {
        title: optional_text("title", input.title.as_deref())?,
        description: input.description,
        status: input.status,
        priority: input.priority,
        due_date: input.due_date,
        assignee_id: input.assignee_id,
        project_id: input.project_id,
    };
    let task = TaskRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Task", id))
    }
}

/// PUT /api/v1/tasks/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TaskStatusRequest>,
) -> AppResult<Json<Task>> {
    let status = require_text("status", input.status.as_deref())?;
    validate_task_status(&status)?;

    let task = TaskRepo::set_status(&state.pool, id, &status)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// Time logs
// ---------------------------------------------------------------------------

/// GET /api/v1/tasks/{id}/time-logs
pub async fn list_time_logs(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<TimeLog>>> {
    ensure_task_exists(&state, id).await?;
    let logs = TimeLogRepo::list_by_task(&state.pool, id).await?;
    Ok(Json(logs))
}

/// POST /api/v1/tasks/{id}/time-logs
pub async fn create_time_log(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TimeLogRequest>,
) -> AppResult<(StatusCode, Json<TimeLog>)> {
    let minutes = require("minutes", input.minutes)?;
    validate_time_log_minutes(minutes)?;
    ensure_task_exists(&state, id).await?;

    let create = CreateTimeLog {
        task_id: id,
        user_id: input.user_id,
        minutes,
        note: input.note,
        logged_at: input.logged_at,
    };
    let log = TimeLogRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
