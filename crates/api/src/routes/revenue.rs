//! Route definitions for the revenue reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::revenue;
use crate::state::AppState;

/// Routes mounted at `/revenue`.
///
/// ```text
/// GET /overview     -> overview
/// GET /trends       -> trends
/// GET /by-client    -> by_client
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(revenue::overview))
        .route("/trends", get(revenue::trends))
        .route("/by-client", get(revenue::by_client))
}
