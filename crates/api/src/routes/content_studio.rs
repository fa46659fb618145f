use axum::routing::post;
use axum::Router;

use crate::handlers::content_studio;
use crate::state::AppState;

/// Routes mounted at `/content-studio`.
///
/// ```text
/// POST /generate-script    -> generate_script
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-script", post(content_studio::generate_script))
}
