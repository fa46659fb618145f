//! Route definitions for the `/tasks` resource, including time logs.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/status       -> update_status
/// GET    /{id}/time-logs    -> list_time_logs
/// POST   /{id}/time-logs    -> create_time_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/status", put(task::update_status))
        .route(
            "/{id}/time-logs",
            get(task::list_time_logs).post(task::create_time_log),
        )
}
