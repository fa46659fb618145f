//! Editing task statuses, attached file lists, and review comments.

use serde_json::Value;

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const EDITING_STATUS_PENDING: &str = "PENDING";
pub const EDITING_STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const EDITING_STATUS_IN_REVIEW: &str = "IN_REVIEW";
pub const EDITING_STATUS_COMPLETED: &str = "COMPLETED";

/// All valid editing task statuses.
pub const VALID_EDITING_STATUSES: &[&str] = &[
    EDITING_STATUS_PENDING,
    EDITING_STATUS_IN_PROGRESS,
    EDITING_STATUS_IN_REVIEW,
    EDITING_STATUS_COMPLETED,
];

/// Validate an editing task status string.
pub fn validate_editing_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("editing status", status, VALID_EDITING_STATUSES)
}

/// Normalise the `files` field of an editing task into a JSON array of paths.
///
/// Clients send either an array of strings or a string that itself holds a
/// JSON array (the format older clients stored). `null` becomes an empty
/// array. Anything else is rejected.
pub fn normalize_files(files: &Value) -> Result<Value, CoreError> {
    let parsed = match files {
        Value::Null => return Ok(Value::Array(Vec::new())),
        Value::String(raw) if raw.trim().is_empty() => return Ok(Value::Array(Vec::new())),
        Value::String(raw) => serde_json::from_str::<Value>(raw).map_err(|_| {
            CoreError::Validation("files must be a JSON array of file paths".to_string())
        })?,
        other => other.clone(),
    };

    match &parsed {
        Value::Array(items) if items.iter().all(Value::is_string) => Ok(parsed),
        _ => Err(CoreError::Validation(
            "files must be an array of file paths".to_string(),
        )),
    }
}

/// Validate a comment's position in the media, in seconds.
pub fn validate_comment_timestamp(timestamp: f64) -> Result<(), CoreError> {
    if !timestamp.is_finite() || timestamp < 0.0 {
        return Err(CoreError::Validation(
            "timestamp must be a non-negative number of seconds".to_string(),
        ));
    }
    Ok(())
}
