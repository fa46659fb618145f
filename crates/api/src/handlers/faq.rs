//! Handlers for the `/faq` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use goat_core::types::DbId;
use goat_core::validation::{optional_text, require_text};
use goat_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use goat_db::repositories::FaqRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// POST /api/v1/faq
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<FaqRequest>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    let create = CreateFaq {
        question: require_text("question", input.question.as_deref())?,
        answer: require_text("answer", input.answer.as_deref())?,
    };
    let faq = FaqRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// GET /api/v1/faq
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list(&state.pool).await?;
    Ok(Json(faqs))
}

/// PUT /api/v1/faq/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<FaqRequest>,
) -> AppResult<Json<Faq>> {
    let update = UpdateFaq {
        question: optional_text("question", input.question.as_deref())?,
        answer: optional_text("answer", input.answer.as_deref())?,
    };
    let faq = FaqRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Faq", id))?;
    Ok(Json(faq))
}

/// DELETE /api/v1/faq/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if FaqRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Faq", id))
    }
}
