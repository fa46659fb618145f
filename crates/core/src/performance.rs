//! Team productivity scoring and workload ranking.
//!
//! The database layer supplies per-user counts; this module turns them into
//! the ranked report rows served by `/performance/*`.

use serde::Serialize;

use crate::task::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_URGENT};
use crate::types::DbId;

/// Completed tasks count towards productivity for this many days.
pub const PRODUCTIVITY_WINDOW_DAYS: i64 = 30;

/// Score contributed by one completed task of the given priority.
///
/// Unknown priorities score nothing.
pub fn priority_weight(priority: &str) -> i64 {
    match priority {
        PRIORITY_URGENT => 4,
        PRIORITY_HIGH => 3,
        PRIORITY_MEDIUM => 2,
        PRIORITY_LOW => 1,
        _ => 0,
    }
}

/// Completed-task counts for one user, split by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub urgent: i64,
}

impl PriorityCounts {
    /// Total number of completed tasks.
    pub fn total(&self) -> i64 {
        self.low + self.medium + self.high + self.urgent
    }

    /// Priority-weighted productivity score.
    pub fn score(&self) -> i64 {
        self.low * priority_weight(PRIORITY_LOW)
            + self.medium * priority_weight(PRIORITY_MEDIUM)
            + self.high * priority_weight(PRIORITY_HIGH)
            + self.urgent * priority_weight(PRIORITY_URGENT)
    }
}

/// One row of the productivity report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductivityEntry {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub tasks_completed_last_30_days: i64,
    pub productivity_score: i64,
}

impl ProductivityEntry {
    pub fn new(user_id: DbId, name: String, email: String, counts: PriorityCounts) -> Self {
        Self {
            user_id,
            name,
            email,
            tasks_completed_last_30_days: counts.total(),
            productivity_score: counts.score(),
        }
    }
}

/// One row of the workload report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadEntry {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub open_tasks: i64,
    pub pending_tasks: i64,
    pub in_progress_tasks: i64,
}

impl WorkloadEntry {
    pub fn new(
        user_id: DbId,
        name: String,
        email: String,
        pending_tasks: i64,
        in_progress_tasks: i64,
    ) -> Self {
        Self {
            user_id,
            name,
            email,
            open_tasks: pending_tasks + in_progress_tasks,
            pending_tasks,
            in_progress_tasks,
        }
    }
}

/// Sort productivity rows by score, highest first. Ties keep input order.
pub fn rank_productivity(mut entries: Vec<ProductivityEntry>) -> Vec<ProductivityEntry> {
    entries.sort_by(|a, b| b.productivity_score.cmp(&a.productivity_score));
    entries
}

/// Sort workload rows by open tasks, busiest first. Ties keep input order.
pub fn rank_workload(mut entries: Vec<WorkloadEntry>) -> Vec<WorkloadEntry> {
    entries.sort_by(|a, b| b.open_tasks.cmp(&a.open_tasks));
    entries
}
