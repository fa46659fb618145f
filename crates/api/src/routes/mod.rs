pub mod auth;
pub mod client;
pub mod content_studio;
pub mod editing_task;
pub mod expense;
pub mod faq;
pub mod health;
pub mod invoice;
pub mod lead;
pub mod notification;
pub mod performance;
pub mod project;
pub mod revenue;
pub mod script;
pub mod shoot;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         current identity (requires auth)
///
/// /users                                           list, create
/// /users/{id}                                      get, update, delete
///
/// /clients                                         list, create
/// /clients/{id}                                    get, update, delete
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
///
/// /tasks                                           list, create
/// /tasks/{id}                                      get, update, delete
/// /tasks/{id}/status                               set status (PUT)
/// /tasks/{id}/time-logs                            list, create
///
/// /shoots                                          list, create
/// /shoots/{id}                                     get, update, delete
/// /shoots/{id}/assign-team                         assign member (POST)
/// /shoots/{id}/assignments/{user_id}               unassign member (DELETE)
/// /shoots/{id}/approval                            approve or reject (PUT)
///
/// /leads                                           list, create
/// /leads/{id}                                      get, update, delete
/// /leads/{id}/assign                               assign (POST)
/// /leads/{id}/status                               set status (PUT)
///
/// /invoices                                        list, create
/// /invoices/{id}                                   get, update, delete
/// /expenses                                        list, create
/// /expenses/{id}                                   get, update, delete
/// /revenue/overview                                financial totals (GET)
/// /revenue/trends                                  monthly revenue vs expenses (GET)
/// /revenue/by-client                               paid revenue per client (GET)
///
/// /scripts                                         list, create
/// /scripts/{id}                                    get, update title, delete
/// /scripts/{id}/versions                           list, create
///
/// /editing-tasks                                   list, create
/// /editing-tasks/{id}                              get, update, delete
/// /editing-tasks/{id}/comments                     list, create
/// /editing-tasks/{id}/comments/{comment_id}        delete
///
/// /notifications                                   list (filtered, paged), create
/// /notifications/{id}                              delete
/// /notifications/{id}/read                         set read flag (PUT)
///
/// /faq                                             list, create
/// /faq/{id}                                        update, delete
///
/// /performance/productivity                        weighted completions (GET)
/// /performance/workload                            open task counts (GET)
///
/// /content-studio/generate-script                  mocked script generation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication.
        .nest("/auth", auth::router())
        // People and organisation.
        .nest("/users", user::router())
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        // Day-to-day work.
        .nest("/tasks", task::router())
        .nest("/shoots", shoot::router())
        .nest("/leads", lead::router())
        // Finance.
        .nest("/invoices", invoice::router())
        .nest("/expenses", expense::router())
        .nest("/revenue", revenue::router())
        // Content production.
        .nest("/scripts", script::router())
        .nest("/editing-tasks", editing_task::router())
        .nest("/content-studio", content_studio::router())
        // Inbox and help.
        .nest("/notifications", notification::router())
        .nest("/faq", faq::router())
        // Reporting.
        .nest("/performance", performance::router())
}
