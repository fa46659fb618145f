//! Handlers for the `/notifications` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::notification::{clamp_limit, clamp_offset, validate_category};
use goat_core::types::DbId;
use goat_core::validation::{require, require_text};
use goat_db::models::notification::{CreateNotification, Notification, NotificationFilter};
use goat_db::repositories::NotificationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::NotificationListParams;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: Option<DbId>,
    pub message: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetReadRequest {
    pub read: Option<bool>,
}

/// GET /api/v1/notifications
///
/// Newest first. `limit` defaults to 50 and is capped at 100.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NotificationListParams>,
) -> AppResult<Json<Vec<Notification>>> {
    let filter = NotificationFilter {
        user_id: params.user_id,
        unread_only: params.unread_only,
        limit: clamp_limit(params.limit),
        offset: clamp_offset(params.offset),
    };
    let notifications = NotificationRepo::list(&state.pool, &filter).await?;
    Ok(Json(notifications))
}

/// POST /api/v1/notifications
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNotificationRequest>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let message = require_text("message", input.message.as_deref())?;
    let category = require_text("category", input.category.as_deref())?;
    validate_category(&category)?;
    let user_id = require("user_id", input.user_id)?;

    let notification = NotificationRepo::create(
        &state.pool,
        &CreateNotification {
            user_id,
            message,
            category,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// PUT /api/v1/notifications/{id}/read
pub async fn set_read(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SetReadRequest>,
) -> AppResult<Json<Notification>> {
    let read = require("read", input.read)?;
    let notification = NotificationRepo::set_read(&state.pool, id, read)
        .await?
        .ok_or_else(|| AppError::not_found("Notification", id))?;
    Ok(Json(notification))
}

/// DELETE /api/v1/notifications/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if NotificationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Notification", id))
    }
}
