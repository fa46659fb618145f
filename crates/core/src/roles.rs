//! User role names.

pub const ROLE_EMPLOYEE: &str = "EMPLOYEE";
pub const ROLE_EXECUTIVE: &str = "EXECUTIVE";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_EMPLOYEE, ROLE_EXECUTIVE];

/// Role assigned when a user is created without one.
pub const DEFAULT_ROLE: &str = ROLE_EMPLOYEE;
