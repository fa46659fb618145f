//! Route definitions for the `/notifications` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /             -> list (?user_id, unread_only, limit, offset)
/// POST   /             -> create
/// DELETE /{id}         -> delete
/// PUT    /{id}/read    -> set_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list).post(notification::create))
        .route("/{id}", delete(notification::delete))
        .route("/{id}/read", put(notification::set_read))
}
