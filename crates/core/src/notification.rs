//! Notification categories and listing limits.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const CATEGORY_URGENT: &str = "URGENT";
pub const CATEGORY_SYSTEM: &str = "SYSTEM";
pub const CATEGORY_REMINDER: &str = "REMINDER";
pub const CATEGORY_GENERAL: &str = "GENERAL";

/// All valid notification categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_URGENT,
    CATEGORY_SYSTEM,
    CATEGORY_REMINDER,
    CATEGORY_GENERAL,
];

/// Default page size for notification listing.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for notification listing.
pub const MAX_LIMIT: i64 = 100;

/// Validate a notification category string.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    validate_one_of("notification category", category, VALID_CATEGORIES)
}

/// Clamp a requested page size into `1..=MAX_LIMIT`, defaulting to [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
