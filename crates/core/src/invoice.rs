//! Invoice statuses, amount checks, and the paid-invoice revenue rule.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const INVOICE_STATUS_UNPAID: &str = "UNPAID";
pub const INVOICE_STATUS_PAID: &str = "PAID";
pub const INVOICE_STATUS_OVERDUE: &str = "OVERDUE";

/// All valid invoice statuses.
pub const VALID_INVOICE_STATUSES: &[&str] = &[
    INVOICE_STATUS_UNPAID,
    INVOICE_STATUS_PAID,
    INVOICE_STATUS_OVERDUE,
];

/// Validate an invoice status string.
pub fn validate_invoice_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("invoice status", status, VALID_INVOICE_STATUSES)
}

/// Validate an invoice amount. Invoices must bill a positive, finite amount.
pub fn validate_invoice_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Validate an expense amount. Zero is allowed, negatives are not.
pub fn validate_expense_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoreError::Validation(
            "amount must be zero or a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Whether an invoice in `status` must have a revenue row recorded.
pub fn records_revenue(status: &str) -> bool {
    status == INVOICE_STATUS_PAID
}
