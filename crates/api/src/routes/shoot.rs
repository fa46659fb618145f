//! Route definitions for the `/shoots` resource.
//!
//! Team assignments and the approval decision hang off a single shoot.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::shoot;
use crate::state::AppState;

/// Routes mounted at `/shoots`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// POST   /{id}/assign-team              -> assign_team
/// DELETE /{id}/assignments/{user_id}    -> remove_assignment
/// PUT    /{id}/approval                 -> set_approval
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shoot::list).post(shoot::create))
        .route(
            "/{id}",
            get(shoot::get_by_id)
                .put(shoot::update)
                .delete(shoot::delete),
        )
        .route("/{id}/assign-team", post(shoot::assign_team))
        .route(
            "/{id}/assignments/{user_id}",
            delete(shoot::remove_assignment),
        )
        .route("/{id}/approval", put(shoot::set_approval))
}
