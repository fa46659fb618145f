//! HTTP-level tests for tasks, task status changes and time logs.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_task_applies_defaults(pool: PgPool) {
    let task = common::create(&pool, "/api/v1/tasks", json!({"title": "Storyboard"})).await;

    assert_eq!(task["title"], "Storyboard");
    assert_eq!(task["status"], "PENDING");
    assert_eq!(task["priority"], "MEDIUM");
    assert!(task["assignee_id"].is_null());
    assert!(task["due_date"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_task_validates_input(pool: PgPool) {
    for body in [
        json!({}),
        json!({"title": "   "}),
        json!({"title": "Bad status", "status": "DONE"}),
        json!({"title": "Bad priority", "priority": "CRITICAL"}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/tasks", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_tasks_embeds_assignee_and_project(pool: PgPool) {
    let alex_id = common::demo_user_id(&pool, "alex.employee@goat.media").await;
    let project = common::create(&pool, "/api/v1/projects", json!({"name": "Launch"})).await;
    common::create(
        &pool,
        "/api/v1/tasks",
        json!({
            "title": "Color grade",
            "priority": "HIGH",
            "assignee_id": alex_id,
            "project_id": project["id"],
            "due_date": "2024-07-01T12:00:00Z",
        }),
    )
    .await;
    common::create(&pool, "/api/v1/tasks", json!({"title": "Loose end"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 2);

    let graded = tasks.iter().find(|t| t["title"] == "Color grade").unwrap();
    assert_eq!(graded["assignee"]["name"], "Alex Doe");
    assert_eq!(graded["project"]["name"], "Launch");
    assert_eq!(graded["priority"], "HIGH");

    let loose = tasks.iter().find(|t| t["title"] == "Loose end").unwrap();
    assert!(loose["assignee"].is_null());
    assert!(loose["project"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_assignee_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "Orphan", "assignee_id": 424242}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_task_keeps_omitted_fields(pool: PgPool) {
    let task = common::create(
        &pool,
        "/api/v1/tasks",
        json!({"title": "Export", "description": "4K master", "priority": "URGENT"}),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/tasks/{id}"),
        json!({"status": "IN_PROGRESS"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["description"], "4K master");
    assert_eq!(json["priority"], "URGENT");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/tasks/{id}"),
        json!({"priority": "SOMEDAY"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_endpoint(pool: PgPool) {
    let task = common::create(&pool, "/api/v1/tasks", json!({"title": "Publish"})).await;
    let id = task["id"].as_i64().unwrap();
    let uri = format!("/api/v1/tasks/{id}/status");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"status": "COMPLETED"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "COMPLETED");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"status": "ARCHIVED"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/tasks/999999/status",
        json!({"status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn time_logs_are_listed_and_embedded(pool: PgPool) {
    let alex_id = common::demo_user_id(&pool, "alex.employee@goat.media").await;
    let task = common::create(&pool, "/api/v1/tasks", json!({"title": "Edit reel"})).await;
    let id = task["id"].as_i64().unwrap();
    let uri = format!("/api/v1/tasks/{id}/time-logs");

    let log = common::create(
        &pool,
        &uri,
        json!({"minutes": 90, "user_id": alex_id, "note": "Rough cut"}),
    )
    .await;
    assert_eq!(log["task_id"], id);
    assert_eq!(log["minutes"], 90);
    assert!(log["logged_at"].is_string());

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["note"], "Rough cut");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tasks/{id}")).await).await;
    assert_eq!(json["time_logs"].as_array().unwrap().len(), 1);
    assert_eq!(json["time_logs"][0]["minutes"], 90);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn time_log_validation(pool: PgPool) {
    let task = common::create(&pool, "/api/v1/tasks", json!({"title": "Mix audio"})).await;
    let uri = format!("/api/v1/tasks/{}/time-logs", task["id"]);

    for body in [json!({}), json!({"minutes": 0}), json!({"minutes": -15})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &uri, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/tasks/999999/time-logs", json!({"minutes": 30})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tasks/999999/time-logs").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_task_removes_its_time_logs(pool: PgPool) {
    let task = common::create(&pool, "/api/v1/tasks", json!({"title": "Temporary"})).await;
    let id = task["id"].as_i64().unwrap();
    common::create(
        &pool,
        &format!("/api/v1/tasks/{id}/time-logs"),
        json!({"minutes": 10}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM time_logs WHERE task_id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
