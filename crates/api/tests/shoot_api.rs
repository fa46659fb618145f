//! HTTP-level tests for shoots, team assignments and approvals.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_shoot(pool: &PgPool) -> Value {
    common::create(
        pool,
        "/api/v1/shoots",
        json!({
            "title": "Rooftop interview",
            "start_time": "2024-06-10T09:00:00Z",
            "end_time": "2024-06-10T12:00:00Z",
            "location": "Studio B",
        }),
    )
    .await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_shoot_defaults_to_pending(pool: PgPool) {
    let shoot = create_shoot(&pool).await;
    assert_eq!(shoot["status"], "PENDING");
    assert_eq!(shoot["location"], "Studio B");
    assert!(shoot["client_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_shoot_validates_window_and_fields(pool: PgPool) {
    for body in [
        json!({"title": "No times"}),
        json!({"title": "No end", "start_time": "2024-06-10T09:00:00Z"}),
        json!({
            "title": "Backwards",
            "start_time": "2024-06-10T12:00:00Z",
            "end_time": "2024-06-10T09:00:00Z",
        }),
        json!({
            "title": "Bad status",
            "start_time": "2024-06-10T09:00:00Z",
            "end_time": "2024-06-10T10:00:00Z",
            "status": "CANCELLED",
        }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/shoots", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn zero_length_shoot_is_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/shoots",
        json!({
            "title": "Pickup shot",
            "start_time": "2024-06-10T09:00:00Z",
            "end_time": "2024-06-10T09:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_checks_window_against_stored_bounds(pool: PgPool) {
    let shoot = create_shoot(&pool).await;
    let uri = format!("/api/v1/shoots/{}", shoot["id"]);

    // Moving only the end before the stored start is rejected.
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"end_time": "2024-06-10T08:00:00Z"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        json!({"end_time": "2024-06-10T15:00:00Z", "location": "Rooftop"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["location"], "Rooftop");
    assert_eq!(json["title"], "Rooftop interview");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/shoots/999999",
        json!({"title": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn assign_and_remove_team_member(pool: PgPool) {
    let alex_id = common::demo_user_id(&pool, "alex.employee@goat.media").await;
    let shoot = create_shoot(&pool).await;
    let shoot_id = shoot["id"].as_i64().unwrap();
    let assign_uri = format!("/api/v1/shoots/{shoot_id}/assign-team");

    let assignment = common::create(
        &pool,
        &assign_uri,
        json!({"user_id": alex_id, "role": "Camera Operator"}),
    )
    .await;
    assert_eq!(assignment["shoot_id"], shoot_id);
    assert_eq!(assignment["role"], "Camera Operator");

    // Same person twice on one shoot.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &assign_uri,
        json!({"user_id": alex_id, "role": "Gaffer"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/shoots/{shoot_id}")).await).await;
    let assignments = json["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["user"]["name"], "Alex Doe");

    let remove_uri = format!("/api/v1/shoots/{shoot_id}/assignments/{alex_id}");
    let app = common::build_test_app(pool.clone());
    assert_eq!(delete(app, &remove_uri).await.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    assert_eq!(delete(app, &remove_uri).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn assign_team_validation(pool: PgPool) {
    let alex_id = common::demo_user_id(&pool, "alex.employee@goat.media").await;
    let shoot = create_shoot(&pool).await;
    let uri = format!("/api/v1/shoots/{}/assign-team", shoot["id"]);

    for body in [json!({"role": "Sound"}), json!({"user_id": alex_id})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &uri, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/shoots/999999/assign-team",
        json!({"user_id": alex_id, "role": "Sound"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = post_json(app, &uri, json!({"user_id": 999999, "role": "Sound"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approval_accepts_only_decisions(pool: PgPool) {
    let shoot = create_shoot(&pool).await;
    let uri = format!("/api/v1/shoots/{}/approval", shoot["id"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"status": "APPROVED"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "APPROVED");

    for body in [json!({"status": "COMPLETED"}), json!({"status": "PENDING"}), json!({})] {
        let app = common::build_test_app(pool.clone());
        let response = put_json(app, &uri, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/shoots/999999/approval",
        json!({"status": "REJECTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn shoots_list_in_start_order_with_client(pool: PgPool) {
    let client = common::create(&pool, "/api/v1/clients", json!({"name": "Orbit Labs"})).await;
    common::create(
        &pool,
        "/api/v1/shoots",
        json!({
            "title": "Later",
            "start_time": "2024-08-01T09:00:00Z",
            "end_time": "2024-08-01T10:00:00Z",
        }),
    )
    .await;
    common::create(
        &pool,
        "/api/v1/shoots",
        json!({
            "title": "Sooner",
            "start_time": "2024-07-01T09:00:00Z",
            "end_time": "2024-07-01T10:00:00Z",
            "client_id": client["id"],
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/shoots").await).await;
    let shoots = json.as_array().unwrap();
    assert_eq!(shoots[0]["title"], "Sooner");
    assert_eq!(shoots[0]["client"]["name"], "Orbit Labs");
    assert_eq!(shoots[1]["title"], "Later");
    assert!(shoots[1]["client"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_shoot_drops_assignments(pool: PgPool) {
    let mia_id = common::demo_user_id(&pool, "mia.exec@goat.media").await;
    let shoot = create_shoot(&pool).await;
    let shoot_id = shoot["id"].as_i64().unwrap();
    common::create(
        &pool,
        &format!("/api/v1/shoots/{shoot_id}/assign-team"),
        json!({"user_id": mia_id, "role": "Producer"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/shoots/{shoot_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shoot_assignments WHERE shoot_id = $1")
            .bind(shoot_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}
