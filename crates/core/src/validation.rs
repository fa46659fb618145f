//! Field-level validation helpers shared by every create/update path.
//!
//! Request bodies arrive with every field optional so that a missing field
//! can be reported as a 400 with a readable message instead of a body
//! rejection. These helpers turn those options into concrete values.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Require a text field to be present and non-blank.
///
/// Returns the trimmed value. An empty or whitespace-only string counts as
/// missing.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Validate an optional text field on an update path.
///
/// Absent stays absent; a present value must not be blank and is trimmed.
pub fn optional_text(field: &str, value: Option<&str>) -> Result<Option<String>, CoreError> {
    value.map(|v| require_text(field, Some(v))).transpose()
}

/// Require a non-text field to be present.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Validate that `email` is a syntactically valid address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Validate that `value` belongs to the vocabulary `allowed`.
///
/// `kind` names the vocabulary in the error message (e.g. `"task status"`).
pub fn validate_one_of(kind: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {kind} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

/// Validate an optional vocabulary value, returning it or `default`.
pub fn one_of_or_default(
    kind: &str,
    value: Option<&str>,
    allowed: &[&str],
    default: &str,
) -> Result<String, CoreError> {
    match value {
        Some(v) => {
            validate_one_of(kind, v, allowed)?;
            Ok(v.to_string())
        }
        None => Ok(default.to_string()),
    }
}

/// Validate an optional vocabulary value on an update path.
pub fn optional_one_of(kind: &str, value: Option<&str>, allowed: &[&str]) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_one_of(kind, v, allowed),
        None => Ok(()),
    }
}
