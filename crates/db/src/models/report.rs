//! Aggregate rows backing the reporting endpoints.

use goat_core::performance::{PriorityCounts, ProductivityEntry, WorkloadEntry};
use goat_core::revenue::ClientRevenue;
use goat_core::types::DbId;
use sqlx::FromRow;

/// Per-user completed task counts split by priority.
#[derive(Debug, Clone, FromRow)]
pub struct UserPriorityCounts {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub urgent: i64,
}

impl From<UserPriorityCounts> for ProductivityEntry {
    fn from(row: UserPriorityCounts) -> Self {
        let counts = PriorityCounts {
            low: row.low,
            medium: row.medium,
            high: row.high,
            urgent: row.urgent,
        };
        ProductivityEntry::new(row.user_id, row.name, row.email, counts)
    }
}

/// Per-user open task counts.
#[derive(Debug, Clone, FromRow)]
pub struct UserOpenTaskCounts {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub pending: i64,
    pub in_progress: i64,
}

impl From<UserOpenTaskCounts> for WorkloadEntry {
    fn from(row: UserOpenTaskCounts) -> Self {
        WorkloadEntry::new(row.user_id, row.name, row.email, row.pending, row.in_progress)
    }
}

/// A monthly sum, keyed by `YYYY-MM`.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: f64,
}

impl From<MonthlyTotal> for (String, f64) {
    fn from(row: MonthlyTotal) -> Self {
        (row.month, row.total)
    }
}

/// Paid invoice total for one client, as read from the database.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRevenueRow {
    pub client_id: DbId,
    pub client_name: Option<String>,
    pub total_revenue: f64,
}

impl From<ClientRevenueRow> for ClientRevenue {
    fn from(row: ClientRevenueRow) -> Self {
        ClientRevenue {
            client_id: row.client_id,
            client_name: row
                .client_name
                .unwrap_or_else(|| goat_core::revenue::UNKNOWN_CLIENT_NAME.to_string()),
            total_revenue: row.total_revenue,
        }
    }
}

/// Headline financial sums.
#[derive(Debug, Clone, Default, FromRow)]
pub struct FinancialTotals {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub unpaid_amount: f64,
    pub overdue_amount: f64,
    pub new_leads: i64,
}
