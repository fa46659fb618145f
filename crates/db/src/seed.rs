//! Demo data loader used by the `goat-seed` binary.
//!
//! Wipes every table and recreates a small, deterministic agency dataset
//! around the two demo accounts.

use chrono::{Duration, Months, Utc};
use goat_core::auth::DEMO_ACCOUNTS;
use goat_core::editing::EDITING_STATUS_IN_REVIEW;
use goat_core::invoice::{INVOICE_STATUS_PAID, INVOICE_STATUS_UNPAID};
use goat_core::lead::{
    LEAD_STATUS_CONTACTED, LEAD_STATUS_CONVERTED, LEAD_STATUS_NEW, LEAD_STATUS_QUALIFIED,
};
use goat_core::notification::{CATEGORY_SYSTEM, CATEGORY_URGENT};
use goat_core::shoot::{SHOOT_STATUS_APPROVED, SHOOT_STATUS_PENDING};
use goat_core::task::{
    PRIORITY_HIGH, PRIORITY_MEDIUM, PRIORITY_URGENT, TASK_STATUS_COMPLETED,
    TASK_STATUS_IN_PROGRESS, TASK_STATUS_PENDING,
};
use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::CreateClient;
use crate::models::editing::{CreateComment, CreateEditingTask};
use crate::models::expense::CreateExpense;
use crate::models::faq::CreateFaq;
use crate::models::invoice::CreateInvoice;
use crate::models::lead::CreateLead;
use crate::models::notification::CreateNotification;
use crate::models::project::CreateProject;
use crate::models::shoot::{CreateShoot, CreateShootAssignment};
use crate::models::task::CreateTask;
use crate::models::user::CreateUser;
use crate::repositories::{
    ClientRepo, CommentRepo, EditingTaskRepo, ExpenseRepo, FaqRepo, InvoiceRepo, LeadRepo,
    NotificationRepo, ProjectRepo, ScriptRepo, ScriptVersionRepo, ShootAssignmentRepo, ShootRepo,
    TaskRepo, UserRepo,
};

/// Row counts produced by [`seed_demo_data`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub clients: usize,
    pub projects: usize,
    pub tasks: usize,
    pub shoots: usize,
    pub leads: usize,
    pub invoices: usize,
    pub expenses: usize,
}

/// Every table, children before parents.
const TABLES: &[&str] = &[
    "time_logs",
    "shoot_assignments",
    "comments",
    "revenue",
    "invoices",
    "notifications",
    "tasks",
    "projects",
    "leads",
    "shoots",
    "clients",
    "users",
    "script_versions",
    "scripts",
    "editing_tasks",
    "expenses",
    "faqs",
];

/// Remove all rows from every table and reset id sequences.
pub async fn clear_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    let query = format!("TRUNCATE {} RESTART IDENTITY CASCADE", TABLES.join(", "));
    sqlx::query(&query).execute(pool).await?;
    Ok(())
}

/// Clear the database and load the demo dataset.
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    clear_all(pool).await?;
    tracing::info!("Cleared existing data");

    let now = Utc::now();
    let mut summary = SeedSummary::default();

    // Users
    let mut user_ids: Vec<DbId> = Vec::with_capacity(DEMO_ACCOUNTS.len());
    for account in DEMO_ACCOUNTS {
        let user = UserRepo::create(
            pool,
            &CreateUser {
                email: account.email.to_string(),
                name: account.name.to_string(),
                role: account.role.to_string(),
            },
        )
        .await?;
        user_ids.push(user.id);
    }
    summary.users = user_ids.len();
    let (alex, mia) = (user_ids[0], user_ids[1]);

    // Clients
    let mut client_ids = Vec::with_capacity(10);
    for i in 1..=10 {
        let client = ClientRepo::create(
            pool,
            &CreateClient {
                name: format!("Client Corp {i}"),
                email: Some(format!("contact@client{i}.com")),
                phone: None,
            },
        )
        .await?;
        client_ids.push(client.id);
    }
    summary.clients = client_ids.len();

    // Projects
    let mut project_ids = Vec::with_capacity(2);
    for name in ["Q3 Marketing Campaign", "Website Redesign"] {
        let project = ProjectRepo::create(
            pool,
            &CreateProject {
                name: name.to_string(),
                description: None,
            },
        )
        .await?;
        project_ids.push(project.id);
    }
    summary.projects = project_ids.len();

    // Tasks: a quarter completed, a quarter in progress, the rest pending.
    for i in 0..30i64 {
        let (status, priority) = match i % 4 {
            0 => (TASK_STATUS_COMPLETED, PRIORITY_HIGH),
            1 => (TASK_STATUS_IN_PROGRESS, PRIORITY_URGENT),
            _ => (TASK_STATUS_PENDING, PRIORITY_MEDIUM),
        };
        TaskRepo::create(
            pool,
            &CreateTask {
                title: format!("Design social media graphic #{}", i + 1),
                description: Some("Create a graphic for the upcoming social media post.".into()),
                status: status.to_string(),
                priority: priority.to_string(),
                due_date: Some(now + Duration::days(i - 15)),
                assignee_id: Some(alex),
                project_id: Some(project_ids[(i % 2) as usize]),
            },
        )
        .await?;
        summary.tasks += 1;
    }

    // Shoots
    let mut shoot_ids = Vec::with_capacity(6);
    for i in 0..6i64 {
        let start_time = now + Duration::days(i * 5 + 2);
        let shoot = ShootRepo::create(
            pool,
            &CreateShoot {
                title: format!("Product Photoshoot {}", i + 1),
                description: None,
                start_time,
                end_time: start_time + Duration::hours(4),
                location: Some(format!("Studio {}", if i % 2 == 0 { "A" } else { "B" })),
                status: if i % 3 == 0 {
                    SHOOT_STATUS_APPROVED
                } else {
                    SHOOT_STATUS_PENDING
                }
                .to_string(),
                client_id: Some(client_ids[i as usize % client_ids.len()]),
            },
        )
        .await?;
        shoot_ids.push(shoot.id);
    }
    summary.shoots = shoot_ids.len();

    for (shoot_id, role) in [(shoot_ids[0], "Photographer"), (shoot_ids[1], "Assistant")] {
        ShootAssignmentRepo::create(
            pool,
            &CreateShootAssignment {
                shoot_id,
                user_id: alex,
                role: role.to_string(),
            },
        )
        .await?;
    }

    // Leads
    for i in 0..10 {
        let status = match i % 5 {
            0 => LEAD_STATUS_CONVERTED,
            1 => LEAD_STATUS_QUALIFIED,
            2 => LEAD_STATUS_CONTACTED,
            _ => LEAD_STATUS_NEW,
        };
        LeadRepo::create(
            pool,
            &CreateLead {
                name: format!("Lead Person {}", i + 1),
                email: format!("lead{i}@example.com"),
                phone: None,
                status: status.to_string(),
                rejection_reason: None,
                assignee_id: Some(if i % 3 == 0 { mia } else { alex }),
            },
        )
        .await?;
        summary.leads += 1;
    }

    // Invoices: every third one paid, which records its revenue.
    for i in 0..8i64 {
        let status = if i % 3 == 0 {
            INVOICE_STATUS_PAID
        } else {
            INVOICE_STATUS_UNPAID
        };
        InvoiceRepo::create(
            pool,
            &CreateInvoice {
                amount: 1200.0 + (i as f64) * 150.0,
                status: status.to_string(),
                due_date: now + Duration::days(i * 10 - 30),
                client_id: client_ids[i as usize],
            },
        )
        .await?;
        summary.invoices += 1;
    }

    // Twelve months of expenses, mid-month.
    for i in 0..12u32 {
        let month_start = now.checked_sub_months(Months::new(i)).unwrap_or(now);
        ExpenseRepo::create(
            pool,
            &CreateExpense {
                description: format!("Software Subscription {}", i + 1),
                amount: 150.0 + f64::from((i * 37) % 100),
                date: Some(month_start - Duration::days(15)),
            },
        )
        .await?;
        summary.expenses += 1;
    }

    // Script with two versions
    let script =
        ScriptRepo::create_with_initial_version(pool, "New Commercial Spot", "Version 1 content...")
            .await?;
    ScriptVersionRepo::create_next(pool, script.script.id, "Version 2 content, revised.").await?;

    // Editing task with a review comment
    let editing = EditingTaskRepo::create(
        pool,
        &CreateEditingTask {
            title: "Edit Commercial Spot".to_string(),
            description: None,
            status: EDITING_STATUS_IN_REVIEW.to_string(),
            files: serde_json::json!(["/uploads/file1.mp4", "/uploads/file2.mov"]),
        },
    )
    .await?;
    CommentRepo::create(
        pool,
        &CreateComment {
            editing_task_id: editing.id,
            content: "Please adjust the color grading at 0:32.".to_string(),
            timestamp: 32.5,
        },
    )
    .await?;

    // Notifications
    NotificationRepo::create(
        pool,
        &CreateNotification {
            user_id: alex,
            message: "Your assigned task \"Design social media graphic #1\" is due tomorrow."
                .to_string(),
            category: CATEGORY_URGENT.to_string(),
        },
    )
    .await?;
    NotificationRepo::create(
        pool,
        &CreateNotification {
            user_id: mia,
            message: "New lead \"Lead Person 9\" has been assigned to you.".to_string(),
            category: CATEGORY_SYSTEM.to_string(),
        },
    )
    .await?;

    // FAQ
    for (question, answer) in [
        (
            "How do I reset my password?",
            "Login uses fixed demo accounts, so there is no password to reset. Use the provided credentials.",
        ),
        (
            "Where can I see my assigned tasks?",
            "Navigate to the \"My Tasks Hub\" on your dashboard.",
        ),
    ] {
        FaqRepo::create(
            pool,
            &CreateFaq {
                question: question.to_string(),
                answer: answer.to_string(),
            },
        )
        .await?;
    }

    tracing::info!(?summary, "Seeded demo data");
    Ok(summary)
}
