//! Route definitions for the `/leads` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::lead;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// POST   /{id}/assign    -> assign
/// PUT    /{id}/status    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lead::list).post(lead::create))
        .route(
            "/{id}",
            get(lead::get_by_id).put(lead::update).delete(lead::delete),
        )
        .route("/{id}/assign", post(lead::assign))
        .route("/{id}/status", put(lead::update_status))
}
