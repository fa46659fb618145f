//! Shoot statuses, approval decisions, and scheduling checks.

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::validate_one_of;

pub const SHOOT_STATUS_PENDING: &str = "PENDING";
pub const SHOOT_STATUS_APPROVED: &str = "APPROVED";
pub const SHOOT_STATUS_REJECTED: &str = "REJECTED";
pub const SHOOT_STATUS_COMPLETED: &str = "COMPLETED";

/// All valid shoot statuses.
pub const VALID_SHOOT_STATUSES: &[&str] = &[
    SHOOT_STATUS_PENDING,
    SHOOT_STATUS_APPROVED,
    SHOOT_STATUS_REJECTED,
    SHOOT_STATUS_COMPLETED,
];

/// The only statuses an approval decision may set.
pub const APPROVAL_DECISIONS: &[&str] = &[SHOOT_STATUS_APPROVED, SHOOT_STATUS_REJECTED];

/// Validate a shoot status string.
pub fn validate_shoot_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("shoot status", status, VALID_SHOOT_STATUSES)
}

/// Validate an approval decision (`APPROVED` or `REJECTED`).
pub fn validate_approval_decision(status: Option<&str>) -> Result<String, CoreError> {
    match status {
        Some(s) if APPROVAL_DECISIONS.contains(&s) => Ok(s.to_string()),
        _ => Err(CoreError::Validation(
            "Invalid status. Must be APPROVED or REJECTED.".to_string(),
        )),
    }
}

/// Validate that a shoot does not end before it starts.
pub fn validate_shoot_window(start_time: Timestamp, end_time: Timestamp) -> Result<(), CoreError> {
    if end_time < start_time {
        return Err(CoreError::Validation(
            "end_time must not be earlier than start_time".to_string(),
        ));
    }
    Ok(())
}
