//! HTTP-level tests for invoices, expenses and the revenue reports.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_client(pool: &PgPool, name: &str) -> i64 {
    let client = common::create(pool, "/api/v1/clients", json!({"name": name})).await;
    client["id"].as_i64().unwrap()
}

async fn create_invoice(pool: &PgPool, client_id: i64, amount: f64, status: &str) -> Value {
    common::create(
        pool,
        "/api/v1/invoices",
        json!({
            "amount": amount,
            "status": status,
            "due_date": "2024-06-30T00:00:00Z",
            "client_id": client_id,
        }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn paid_invoice_records_revenue(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    let invoice = create_invoice(&pool, client_id, 2500.0, "PAID").await;
    let id = invoice["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/invoices/{id}")).await).await;
    assert_eq!(json["status"], "PAID");
    assert_eq!(json["client"]["name"], "Harbor Hotels");
    assert_eq!(json["revenue"]["amount"], 2500.0);
    assert_eq!(json["revenue"]["invoice_id"], id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invoice_defaults_to_unpaid_without_revenue(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    let invoice = common::create(
        &pool,
        "/api/v1/invoices",
        json!({"amount": 400.0, "due_date": "2024-06-30T00:00:00Z", "client_id": client_id}),
    )
    .await;
    assert_eq!(invoice["status"], "UNPAID");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/invoices/{}", invoice["id"])).await).await;
    assert!(json["revenue"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn paying_invoice_later_records_revenue_once(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    let invoice = create_invoice(&pool, client_id, 800.0, "UNPAID").await;
    let id = invoice["id"].as_i64().unwrap();
    let uri = format!("/api/v1/invoices/{id}");

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = put_json(app, &uri, json!({"status": "PAID"})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revenue WHERE invoice_id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    // Reverting the status keeps the recorded revenue.
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"status": "OVERDUE"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["status"], "OVERDUE");
    assert_eq!(json["revenue"]["amount"], 800.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invoice_validation(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    for body in [
        json!({"amount": 0.0, "due_date": "2024-06-30T00:00:00Z", "client_id": client_id}),
        json!({"amount": -5.0, "due_date": "2024-06-30T00:00:00Z", "client_id": client_id}),
        json!({"amount": 100.0, "due_date": "2024-06-30T00:00:00Z"}),
        json!({"amount": 100.0, "client_id": client_id}),
        json!({
            "amount": 100.0,
            "due_date": "2024-06-30T00:00:00Z",
            "client_id": client_id,
            "status": "VOID",
        }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/invoices", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/invoices",
        json!({"amount": 100.0, "due_date": "2024-06-30T00:00:00Z", "client_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_invoice_removes_revenue(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    let invoice = create_invoice(&pool, client_id, 1000.0, "PAID").await;
    let id = invoice["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/invoices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revenue")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/invoices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invoice_list_embeds_client(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    create_invoice(&pool, client_id, 150.0, "UNPAID").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/invoices").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["client"]["name"], "Harbor Hotels");
    assert_eq!(json[0]["amount"], 150.0);
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn expense_crud(pool: PgPool) {
    let expense = common::create(
        &pool,
        "/api/v1/expenses",
        json!({"description": "Lens rental", "amount": 120.5, "date": "2024-05-02T00:00:00Z"}),
    )
    .await;
    let id = expense["id"].as_i64().unwrap();
    assert_eq!(expense["amount"], 120.5);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/expenses/{id}"),
        json!({"amount": 140.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["amount"], 140.0);
    assert_eq!(json["description"], "Lens rental");

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/expenses/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/api/v1/expenses/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn expense_validation(pool: PgPool) {
    for body in [
        json!({"amount": 10.0}),
        json!({"description": "Snacks"}),
        json!({"description": "Refund?", "amount": -1.0}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/expenses", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

// ---------------------------------------------------------------------------
// Revenue reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn overview_on_empty_database_is_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/revenue/overview").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["total_revenue"], 0.0);
    assert_eq!(data["total_expenses"], 0.0);
    assert_eq!(data["net_profit"], 0.0);
    assert_eq!(data["new_leads_last_30_days"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn overview_sums_revenue_expenses_and_outstanding(pool: PgPool) {
    let client_id = create_client(&pool, "Harbor Hotels").await;
    create_invoice(&pool, client_id, 3000.0, "PAID").await;
    create_invoice(&pool, client_id, 700.0, "UNPAID").await;
    create_invoice(&pool, client_id, 200.0, "OVERDUE").await;
    common::create(
        &pool,
        "/api/v1/expenses",
        json!({"description": "Drone insurance", "amount": 500.0}),
    )
    .await;
    common::create(
        &pool,
        "/api/v1/leads",
        json!({"name": "Fresh", "email": "fresh@lead.test"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/revenue/overview").await).await;
    let data = &json["data"];
    assert_eq!(data["total_revenue"], 3000.0);
    assert_eq!(data["total_expenses"], 500.0);
    assert_eq!(data["net_profit"], 2500.0);
    assert_eq!(data["unpaid_amount"], 700.0);
    assert_eq!(data["overdue_amount"], 200.0);
    assert_eq!(data["new_leads_last_30_days"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn trends_merge_revenue_and_expense_months(pool: PgPool) {
    common::create(
        &pool,
        "/api/v1/expenses",
        json!({"description": "Old gear", "amount": 80.0, "date": "2024-01-15T00:00:00Z"}),
    )
    .await;
    sqlx::query("INSERT INTO revenue (amount, date) VALUES (1200, '2024-03-05T00:00:00Z')")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/revenue/trends").await).await;
    let trends = json["data"].as_array().unwrap();
    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0]["month"], "2024-01");
    assert_eq!(trends[0]["revenue"], 0.0);
    assert_eq!(trends[0]["expenses"], 80.0);
    assert_eq!(trends[1]["month"], "2024-03");
    assert_eq!(trends[1]["revenue"], 1200.0);
    assert_eq!(trends[1]["expenses"], 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn by_client_counts_only_paid_invoices(pool: PgPool) {
    let small = create_client(&pool, "Small Co").await;
    let big = create_client(&pool, "Big Co").await;
    create_invoice(&pool, small, 100.0, "PAID").await;
    create_invoice(&pool, big, 900.0, "PAID").await;
    create_invoice(&pool, big, 100.0, "PAID").await;
    create_invoice(&pool, small, 5000.0, "UNPAID").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/revenue/by-client").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["client_name"], "Big Co");
    assert_eq!(rows[0]["total_revenue"], 1000.0);
    assert_eq!(rows[1]["client_name"], "Small Co");
    assert_eq!(rows[1]["total_revenue"], 100.0);
}
