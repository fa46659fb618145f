//! HTTP-level tests for scripts and their version history.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_script_starts_at_version_one(pool: PgPool) {
    let script = common::create(
        &pool,
        "/api/v1/scripts",
        json!({"title": "Brand film", "initial_content": "INT. STUDIO - DAY"}),
    )
    .await;

    assert_eq!(script["title"], "Brand film");
    let versions = script["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0]["version"], 1);
    assert_eq!(versions[0]["content"], "INT. STUDIO - DAY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_initial_content_uses_placeholder(pool: PgPool) {
    for body in [
        json!({"title": "No content"}),
        json!({"title": "Blank content", "initial_content": "  "}),
    ] {
        let script = common::create(&pool, "/api/v1/scripts", body).await;
        assert_eq!(script["versions"][0]["content"], "Initial version.");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_script_requires_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/scripts", json!({"initial_content": "x"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn versions_number_sequentially_newest_first(pool: PgPool) {
    let script = common::create(&pool, "/api/v1/scripts", json!({"title": "Promo"})).await;
    let id = script["id"].as_i64().unwrap();
    let uri = format!("/api/v1/scripts/{id}/versions");

    let v2 = common::create(&pool, &uri, json!({"content": "Second draft"})).await;
    assert_eq!(v2["version"], 2);
    assert_eq!(v2["script_id"], id);

    let v3 = common::create(&pool, &uri, json!({"content": "  Third draft\n"})).await;
    assert_eq!(v3["version"], 3);
    assert_eq!(v3["content"], "  Third draft\n");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &uri).await).await;
    let numbers: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["version"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, [3, 2, 1]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/scripts/{id}")).await).await;
    assert_eq!(json["versions"][0]["version"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn new_version_moves_script_to_top_of_list(pool: PgPool) {
    let older = common::create(&pool, "/api/v1/scripts", json!({"title": "Older"})).await;
    common::create(&pool, "/api/v1/scripts", json!({"title": "Newer"})).await;

    common::create(
        &pool,
        &format!("/api/v1/scripts/{}/versions", older["id"]),
        json!({"content": "Revision"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/scripts").await).await;
    assert_eq!(json[0]["title"], "Older");
    assert_eq!(json[1]["title"], "Newer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn version_validation(pool: PgPool) {
    let script = common::create(&pool, "/api/v1/scripts", json!({"title": "Teaser"})).await;
    let uri = format!("/api/v1/scripts/{}/versions", script["id"]);

    for body in [json!({}), json!({"content": " \n "})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &uri, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/scripts/999999/versions",
        json!({"content": "Lost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/scripts/999999/versions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_and_delete_script(pool: PgPool) {
    let script = common::create(&pool, "/api/v1/scripts", json!({"title": "Draft"})).await;
    let id = script["id"].as_i64().unwrap();
    let uri = format!("/api/v1/scripts/{id}");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"title": "Final"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Final");

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NO_CONTENT);

    let versions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM script_versions WHERE script_id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(versions, 0);

    let app = common::build_test_app(pool);
    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);
}
