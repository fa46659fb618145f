//! Handlers for team performance reports.
//!
//! Aggregation happens in SQL; scoring and ranking live in
//! `goat_core::performance`.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use goat_core::performance::{
    rank_productivity, rank_workload, ProductivityEntry, WorkloadEntry, PRODUCTIVITY_WINDOW_DAYS,
};
use goat_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/performance/productivity
///
/// Tasks completed in the last 30 days, weighted by priority.
pub async fn productivity(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductivityEntry>>>> {
    let since = Utc::now() - Duration::days(PRODUCTIVITY_WINDOW_DAYS);
    let rows = ReportRepo::completed_task_counts(&state.pool, since).await?;
    let entries = rank_productivity(rows.into_iter().map(ProductivityEntry::from).collect());
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/performance/workload
pub async fn workload(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WorkloadEntry>>>> {
    let rows = ReportRepo::open_task_counts(&state.pool).await?;
    let entries = rank_workload(rows.into_iter().map(WorkloadEntry::from).collect());
    Ok(Json(DataResponse { data: entries }))
}
