//! Task status and priority vocabularies.

use crate::error::CoreError;
use crate::validation::validate_one_of;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const TASK_STATUS_PENDING: &str = "PENDING";
pub const TASK_STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const TASK_STATUS_COMPLETED: &str = "COMPLETED";

/// All valid task statuses.
pub const VALID_TASK_STATUSES: &[&str] = &[
    TASK_STATUS_PENDING,
    TASK_STATUS_IN_PROGRESS,
    TASK_STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "LOW";
pub const PRIORITY_MEDIUM: &str = "MEDIUM";
pub const PRIORITY_HIGH: &str = "HIGH";
pub const PRIORITY_URGENT: &str = "URGENT";

/// All valid task priorities, lowest first.
pub const VALID_PRIORITIES: &[&str] =
    &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH, PRIORITY_URGENT];

/// Validate a task status string.
pub fn validate_task_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("task status", status, VALID_TASK_STATUSES)
}

/// Validate a task priority string.
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    validate_one_of("priority", priority, VALID_PRIORITIES)
}

/// Minimum minutes a single time log entry may record.
pub const MIN_TIME_LOG_MINUTES: i32 = 1;

/// Validate the duration of a time log entry.
pub fn validate_time_log_minutes(minutes: i32) -> Result<(), CoreError> {
    if minutes < MIN_TIME_LOG_MINUTES {
        return Err(CoreError::Validation(format!(
            "minutes must be at least {MIN_TIME_LOG_MINUTES}"
        )));
    }
    Ok(())
}
