//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod comment_repo;
pub mod editing_task_repo;
pub mod expense_repo;
pub mod faq_repo;
pub mod invoice_repo;
pub mod lead_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod report_repo;
pub mod revenue_repo;
pub mod script_repo;
pub mod script_version_repo;
pub mod shoot_assignment_repo;
pub mod shoot_repo;
pub mod task_repo;
pub mod time_log_repo;
pub mod user_repo;

pub use client_repo::ClientRepo;
pub use comment_repo::CommentRepo;
pub use editing_task_repo::EditingTaskRepo;
pub use expense_repo::ExpenseRepo;
pub use faq_repo::FaqRepo;
pub use invoice_repo::InvoiceRepo;
pub use lead_repo::LeadRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use report_repo::ReportRepo;
pub use revenue_repo::RevenueRepo;
pub use script_repo::ScriptRepo;
pub use script_version_repo::ScriptVersionRepo;
pub use shoot_assignment_repo::ShootAssignmentRepo;
pub use shoot_repo::ShootRepo;
pub use task_repo::TaskRepo;
pub use time_log_repo::TimeLogRepo;
pub use user_repo::UserRepo;
