//! Lead pipeline statuses and the rejection-reason rule.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const LEAD_STATUS_NEW: &str = "NEW";
pub const LEAD_STATUS_CONTACTED: &str = "CONTACTED";
pub const LEAD_STATUS_QUALIFIED: &str = "QUALIFIED";
pub const LEAD_STATUS_CONVERTED: &str = "CONVERTED";
pub const LEAD_STATUS_REJECTED: &str = "REJECTED";

/// All valid lead statuses.
pub const VALID_LEAD_STATUSES: &[&str] = &[
    LEAD_STATUS_NEW,
    LEAD_STATUS_CONTACTED,
    LEAD_STATUS_QUALIFIED,
    LEAD_STATUS_CONVERTED,
    LEAD_STATUS_REJECTED,
];

/// Validate a lead status string.
pub fn validate_lead_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("lead status", status, VALID_LEAD_STATUSES)
}

/// Resolve the rejection reason to store alongside a status change.
///
/// A `REJECTED` lead must carry a non-blank reason. Every other status
/// clears any previous reason, so the result is `None`.
pub fn resolve_rejection_reason(
    status: &str,
    rejection_reason: Option<&str>,
) -> Result<Option<String>, CoreError> {
    if status != LEAD_STATUS_REJECTED {
        return Ok(None);
    }
    match rejection_reason.map(str::trim) {
        Some(reason) if !reason.is_empty() => Ok(Some(reason.to_string())),
        _ => Err(CoreError::Validation(
            "Rejection reason is required when rejecting a lead".to_string(),
        )),
    }
}
