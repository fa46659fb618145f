//! Route definitions for the `/editing-tasks` resource and review comments.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::editing_task;
use crate::state::AppState;

/// Routes mounted at `/editing-tasks`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// GET    /{id}                           -> get_by_id
/// PUT    /{id}                           -> update
/// DELETE /{id}                           -> delete
/// GET    /{id}/comments                  -> list_comments
/// POST   /{id}/comments                  -> create_comment
/// DELETE /{id}/comments/{comment_id}     -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(editing_task::list).post(editing_task::create))
        .route(
            "/{id}",
            get(editing_task::get_by_id)
                .put(editing_task::update)
                .delete(editing_task::delete),
        )
        .route(
            "/{id}/comments",
            get(editing_task::list_comments).post(editing_task::create_comment),
        )
        .route(
            "/{id}/comments/{comment_id}",
            delete(editing_task::delete_comment),
        )
}
