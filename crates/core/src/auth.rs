//! Hardcoded demo accounts accepted by the login endpoint.

use crate::roles::{ROLE_EMPLOYEE, ROLE_EXECUTIVE};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// A login identity that exists without a credentials table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub designation: &'static str,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "alex.employee@goat.media",
        password: DEMO_PASSWORD,
        name: "Alex Doe",
        role: ROLE_EMPLOYEE,
        designation: "Content Creator",
    },
    DemoAccount {
        email: "mia.exec@goat.media",
        password: DEMO_PASSWORD,
        name: "Mia Wong",
        role: ROLE_EXECUTIVE,
        designation: "Head of Operations",
    },
];

/// Match an email/password pair against the demo accounts.
///
/// Email comparison is exact; no normalisation is applied.
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoAccount> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)
}
