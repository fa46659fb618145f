//! Shared query parameter types for API handlers.

use goat_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /notifications`.
///
/// `limit` and `offset` are clamped through
/// `goat_core::notification::clamp_limit` / `clamp_offset` before they reach
/// the repository.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationListParams {
    pub user_id: Option<DbId>,
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
