//! HTTP-level tests for the lead pipeline.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_lead(pool: &PgPool) -> Value {
    common::create(
        pool,
        "/api/v1/leads",
        json!({"name": "Bluefin Apparel", "email": "ops@bluefin.test", "phone": "555-0199"}),
    )
    .await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_lead_defaults_to_new(pool: PgPool) {
    let lead = create_lead(&pool).await;
    assert_eq!(lead["status"], "NEW");
    assert!(lead["rejection_reason"].is_null());
    assert!(lead["assignee_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_lead_validation(pool: PgPool) {
    for body in [
        json!({"email": "a@b.test"}),
        json!({"name": "No Email"}),
        json!({"name": "Bad Email", "email": "nope"}),
        json!({"name": "Bad Status", "email": "a@b.test", "status": "WON"}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/leads", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejected_lead_requires_reason(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/leads",
        json!({"name": "Gone Co", "email": "gone@co.test", "status": "REJECTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let lead = common::create(
        &pool,
        "/api/v1/leads",
        json!({
            "name": "Gone Co",
            "email": "gone@co.test",
            "status": "REJECTED",
            "rejection_reason": "Budget",
        }),
    )
    .await;
    assert_eq!(lead["status"], "REJECTED");
    assert_eq!(lead["rejection_reason"], "Budget");

    // A reason on a lead that is not rejected is dropped.
    let lead = common::create(
        &pool,
        "/api/v1/leads",
        json!({"name": "Warm Co", "email": "warm@co.test", "rejection_reason": "Budget"}),
    )
    .await;
    assert_eq!(lead["status"], "NEW");
    assert!(lead["rejection_reason"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejecting_requires_reason(pool: PgPool) {
    let lead = create_lead(&pool).await;
    let uri = format!("/api/v1/leads/{}/status", lead["id"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"status": "REJECTED"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        json!({"status": "REJECTED", "rejection_reason": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        json!({"status": "REJECTED", "rejection_reason": "No budget this quarter"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "REJECTED");
    assert_eq!(json["rejection_reason"], "No budget this quarter");

    // Moving on clears the old reason.
    let app = common::build_test_app(pool);
    let response = put_json(app, &uri, json!({"status": "CONTACTED"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "CONTACTED");
    assert!(json["rejection_reason"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_endpoint_validation(pool: PgPool) {
    let lead = create_lead(&pool).await;
    let uri = format!("/api/v1/leads/{}/status", lead["id"]);

    for body in [json!({}), json!({"status": "LOST"})] {
        let app = common::build_test_app(pool.clone());
        let response = put_json(app, &uri, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/leads/999999/status",
        json!({"status": "QUALIFIED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_can_change_status_with_reason_rules(pool: PgPool) {
    let lead = create_lead(&pool).await;
    let uri = format!("/api/v1/leads/{}", lead["id"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"status": "REJECTED"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        json!({"phone": "555-0000", "status": "QUALIFIED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["phone"], "555-0000");
    assert_eq!(json["status"], "QUALIFIED");
    assert_eq!(json["name"], "Bluefin Apparel");

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/leads/999999", json!({"name": "Ghost"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_rewords_reason_only_on_rejected_lead(pool: PgPool) {
    let lead = create_lead(&pool).await;
    let uri = format!("/api/v1/leads/{}", lead["id"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"rejection_reason": "too small"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        json!({"status": "REJECTED", "rejection_reason": "No budget"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"rejection_reason": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        json!({"rejection_reason": "too small", "phone": "555-0101"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "REJECTED");
    assert_eq!(json["rejection_reason"], "too small");
    assert_eq!(json["phone"], "555-0101");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/leads/999999",
        json!({"rejection_reason": "too small"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn assign_lead(pool: PgPool) {
    let mia_id = common::demo_user_id(&pool, "mia.exec@goat.media").await;
    let lead = create_lead(&pool).await;
    let id = lead["id"].as_i64().unwrap();
    let uri = format!("/api/v1/leads/{id}/assign");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &uri, json!({"user_id": mia_id})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["assignee_id"], mia_id);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/leads/{id}")).await).await;
    assert_eq!(json["assignee"]["name"], "Mia Wong");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &uri, json!({"user_id": 999999})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/leads/999999/assign",
        json!({"user_id": mia_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_and_delete_leads(pool: PgPool) {
    let lead = create_lead(&pool).await;
    let id = lead["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/leads").await).await;
    let leads = json.as_array().unwrap();
    assert_eq!(leads.len(), 1);
    assert!(leads[0]["assignee"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/leads/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/leads/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
