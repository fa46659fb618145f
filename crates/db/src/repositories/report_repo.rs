//! Aggregate queries for the performance and revenue reports.

use goat_core::invoice::{INVOICE_STATUS_OVERDUE, INVOICE_STATUS_PAID, INVOICE_STATUS_UNPAID};
use goat_core::task::{
    PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_URGENT, TASK_STATUS_COMPLETED,
    TASK_STATUS_IN_PROGRESS, TASK_STATUS_PENDING,
};
use goat_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::report::{
    ClientRevenueRow, FinancialTotals, MonthlyTotal, UserOpenTaskCounts, UserPriorityCounts,
};

/// Read-only reporting queries.
pub struct ReportRepo;

impl ReportRepo {
    /// Per-user counts of tasks completed since `since`, split by priority.
    ///
    /// Completion time is taken from the task's `updated_at`. Users with no
    /// completed tasks are included with zero counts.
    pub async fn completed_task_counts(
        pool: &PgPool,
        since: Timestamp,
    ) -> Result<Vec<UserPriorityCounts>, sqlx::Error> {
        sqlx::query_as::<_, UserPriorityCounts>(
            "SELECT u.id AS user_id, u.name, u.email,
                    COUNT(t.id) FILTER (WHERE t.priority = $3) AS low,
                    COUNT(t.id) FILTER (WHERE t.priority = $4) AS medium,
                    COUNT(t.id) FILTER (WHERE t.priority = $5) AS high,
                    COUNT(t.id) FILTER (WHERE t.priority = $6) AS urgent
             FROM users u
             LEFT JOIN tasks t
                ON t.assignee_id = u.id AND t.status = $2 AND t.updated_at >= $1
             GROUP BY u.id
             ORDER BY u.name ASC, u.id ASC",
        )
        .bind(since)
        .bind(TASK_STATUS_COMPLETED)
        .bind(PRIORITY_LOW)
        .bind(PRIORITY_MEDIUM)
        .bind(PRIORITY_HIGH)
        .bind(PRIORITY_URGENT)
        .fetch_all(pool)
        .await
    }

    /// Per-user counts of pending and in-progress tasks.
    pub async fn open_task_counts(pool: &PgPool) -> Result<Vec<UserOpenTaskCounts>, sqlx::Error> {
        sqlx::query_as::<_, UserOpenTaskCounts>(
            "SELECT u.id AS user_id, u.name, u.email,
                    COUNT(t.id) FILTER (WHERE t.status = $1) AS pending,
                    COUNT(t.id) FILTER (WHERE t.status = $2) AS in_progress
             FROM users u
             LEFT JOIN tasks t ON t.assignee_id = u.id
             GROUP BY u.id
             ORDER BY u.name ASC, u.id ASC",
        )
        .bind(TASK_STATUS_PENDING)
        .bind(TASK_STATUS_IN_PROGRESS)
        .fetch_all(pool)
        .await
    }

    /// Headline sums for the revenue overview. Empty tables sum to zero.
    pub async fn financial_totals(
        pool: &PgPool,
        leads_since: Timestamp,
    ) -> Result<FinancialTotals, sqlx::Error> {
        sqlx::query_as::<_, FinancialTotals>(
            "SELECT
                COALESCE((SELECT SUM(amount) FROM revenue), 0)::DOUBLE PRECISION AS total_revenue,
                COALESCE((SELECT SUM(amount) FROM expenses), 0)::DOUBLE PRECISION AS total_expenses,
                COALESCE((SELECT SUM(amount) FROM invoices WHERE status = $1), 0)::DOUBLE PRECISION
                    AS unpaid_amount,
                COALESCE((SELECT SUM(amount) FROM invoices WHERE status = $2), 0)::DOUBLE PRECISION
                    AS overdue_amount,
                (SELECT COUNT(*) FROM leads WHERE created_at >= $3) AS new_leads",
        )
        .bind(INVOICE_STATUS_UNPAID)
        .bind(INVOICE_STATUS_OVERDUE)
        .bind(leads_since)
        .fetch_one(pool)
        .await
    }

    /// Revenue summed per calendar month (UTC), oldest first.
    pub async fn monthly_revenue(pool: &PgPool) -> Result<Vec<MonthlyTotal>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyTotal>(
            "SELECT to_char(date AT TIME ZONE 'UTC', 'YYYY-MM') AS month,
                    SUM(amount)::DOUBLE PRECISION AS total
             FROM revenue
             GROUP BY 1
             ORDER BY 1",
        )
        .fetch_all(pool)
        .await
    }

    /// Expenses summed per calendar month (UTC), oldest first.
    pub async fn monthly_expenses(pool: &PgPool) -> Result<Vec<MonthlyTotal>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyTotal>(
            "SELECT to_char(date AT TIME ZONE 'UTC', 'YYYY-MM') AS month,
                    SUM(amount)::DOUBLE PRECISION AS total
             FROM expenses
             GROUP BY 1
             ORDER BY 1",
        )
        .fetch_all(pool)
        .await
    }

    /// Paid invoice totals per client, largest first.
    pub async fn paid_revenue_by_client(
        pool: &PgPool,
    ) -> Result<Vec<ClientRevenueRow>, sqlx::Error> {
        sqlx::query_as::<_, ClientRevenueRow>(
            "SELECT i.client_id, c.name AS client_name,
                    SUM(i.amount)::DOUBLE PRECISION AS total_revenue
             FROM invoices i
             LEFT JOIN clients c ON c.id = i.client_id
             WHERE i.status = $1
             GROUP BY i.client_id, c.name
             ORDER BY total_revenue DESC",
        )
        .bind(INVOICE_STATUS_PAID)
        .fetch_all(pool)
        .await
    }
}
