//! Handlers for the revenue reports.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use goat_core::revenue::{
    merge_monthly_trends, rank_clients, ClientRevenue, MonthlyTrend, RevenueOverview,
    NEW_LEAD_WINDOW_DAYS,
};
use goat_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/revenue/overview
pub async fn overview(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<RevenueOverview>>> {
    let since = Utc::now() - Duration::days(NEW_LEAD_WINDOW_DAYS);
    let totals = ReportRepo::financial_totals(&state.pool, since).await?;

    Ok(Json(DataResponse {
        data: RevenueOverview::new(
            totals.total_revenue,
            totals.total_expenses,
            totals.unpaid_amount,
            totals.overdue_amount,
            totals.new_leads,
        ),
    }))
}

/// GET /api/v1/revenue/trends
///
/// Months are `YYYY-MM` in UTC, oldest first.
pub async fn trends(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MonthlyTrend>>>> {
    let revenue: Vec<(String, f64)> = ReportRepo::monthly_revenue(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let expenses: Vec<(String, f64)> = ReportRepo::monthly_expenses(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(DataResponse {
        data: merge_monthly_trends(&revenue, &expenses),
    }))
}

/// GET /api/v1/revenue/by-client
pub async fn by_client(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ClientRevenue>>>> {
    let rows = ReportRepo::paid_revenue_by_client(&state.pool).await?;
    let clients = rank_clients(rows.into_iter().map(ClientRevenue::from).collect());
    Ok(Json(DataResponse { data: clients }))
}
