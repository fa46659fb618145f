//! Shared response envelope types for API handlers.
//!
//! Auth and reporting endpoints answer with a `{ "data": ... }` envelope;
//! entity CRUD endpoints return the bare entity.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: entries }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
