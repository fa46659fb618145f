//! Handlers for the `/leads` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::error::CoreError;
use goat_core::lead::{
    resolve_rejection_reason, validate_lead_status, LEAD_STATUS_NEW, LEAD_STATUS_REJECTED,
    VALID_LEAD_STATUSES,
};
use goat_core::types::DbId;
use goat_core::validation::{
    one_of_or_default, optional_text, require, require_text, validate_email,
};
use goat_db::models::lead::{CreateLead, Lead, LeadWithAssignee, UpdateLead};
use goat_db::repositories::LeadRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub rejection_reason: Option<String>,
    pub assignee_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct AssignLeadRequest {
    pub user_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct LeadStatusRequest {
    pub status: Option<String>,
    pub rejection_reason: Option<String>,
}

/// POST /api/v1/leads
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<LeadRequest>,
) -> AppResult<(StatusCode, Json<Lead>)> {
    let name = require_text("name", input.name.as_deref())?;
    let email = require_text("email", input.email.as_deref())?;
    validate_email(&email)?;

    let status = one_of_or_default(
        "lead status",
        input.status.as_deref(),
        VALID_LEAD_STATUSES,
        LEAD_STATUS_NEW,
    )?;
    let rejection_reason = resolve_rejection_reason(&status, input.rejection_reason.as_deref())?;

    let create = CreateLead {
        name,
        email,
        phone: input.phone,
        status,
        rejection_reason,
        assignee_id: input.assignee_id,
    };
    let lead = LeadRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// GET /api/v1/leads
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LeadWithAssignee>>> {
    let leads = LeadRepo::list_with_assignee(&state.pool).await?;
    Ok(Json(leads))
}

/// GET /api/v1/leads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<LeadWithAssignee>> {
    let lead = LeadRepo::find_with_assignee(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Lead", id))?;
    Ok(Json(lead))
}

/// PUT /api/v1/leads/{id}
///
/// A status in the body follows the same rejection-reason rules as
/// `PUT /leads/{id}/status`. A reason sent on its own rewords the reason of
/// a lead that is already `REJECTED` and is refused for any other lead.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<LeadRequest>,
) -> AppResult<Json<Lead>> {
    let (status, rejection_reason, required_status) =
        match (input.status.as_deref(), input.rejection_reason.as_deref()) {
            (Some(status), reason) => {
                validate_lead_status(status)?;
                let reason = resolve_rejection_reason(status, reason)?;
                (Some(status.to_string()), Some(reason), None)
            }
            (None, Some(reason)) => {
                let reason = resolve_rejection_reason(LEAD_STATUS_REJECTED, Some(reason))?;
                (None, Some(reason), Some(LEAD_STATUS_REJECTED))
            }
            (None, None) => (None, None, None),
        };
    let email = optional_text("email", input.email.as_deref())?;
    if let Some(email) = &email {
        validate_email(email)?;
    }

    let update = UpdateLead {
        name: optional_text("name", input.name.as_deref())?,
        email,
        phone: input.phone,
        assignee_id: input.assignee_id,
        status,
        rejection_reason,
    };
    let Some(lead) = LeadRepo::update(&state.pool, id, &update, required_status).await? else {
        if required_status.is_some() && LeadRepo::find_by_id(&state.pool, id).await?.is_some() {
            return Err(CoreError::Validation(
                "Rejection reason can only be set on a rejected lead".to_string(),
            )
            .into());
        }
        return Err(AppError::not_found("Lead", id));
    };

    if update.status.is_some() {
        tracing::info!(lead_id = id, status = %lead.status, "Lead status changed");
    }
    Ok(Json(lead))
}

/// DELETE /api/v1/leads/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if LeadRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Lead", id))
    }
}

/// POST /api/v1/leads/{id}/assign
pub async fn assign(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AssignLeadRequest>,
) -> AppResult<Json<Lead>> {
    let user_id = require("user_id", input.user_id)?;

    let lead = LeadRepo::assign(&state.pool, id, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Lead", id))?;
    Ok(Json(lead))
}

/// PUT /api/v1/leads/{id}/status
///
/// `REJECTED` needs a reason; any other status clears the stored one.
pub async fn update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<LeadStatusRequest>,
) -> AppResult<Json<Lead>> {
    let status = require_text("status", input.status.as_deref())?;
    validate_lead_status(&status)?;
    let reason = resolve_rejection_reason(&status, input.rejection_reason.as_deref())?;

    let lead = LeadRepo::set_status(&state.pool, id, &status, reason.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Lead", id))?;

    tracing::info!(lead_id = id, status = %lead.status, "Lead status changed");
    Ok(Json(lead))
}
