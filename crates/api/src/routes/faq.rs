//! Route definitions for the `/faq` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Routes mounted at `/faq`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faq::list).post(faq::create))
        .route("/{id}", put(faq::update).delete(faq::delete))
}
