//! Route definitions for team performance reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::performance;
use crate::state::AppState;

/// Performance routes mounted at `/performance`.
///
/// ```text
/// GET /productivity    -> productivity
/// GET /workload        -> workload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/productivity", get(performance::productivity))
        .route("/workload", get(performance::workload))
}
