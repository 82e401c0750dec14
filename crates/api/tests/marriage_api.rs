//! HTTP-level integration tests for marriage endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, post_json_auth, put_json_auth};
use giapha_db::models::member::{CreateMember, Member};
use giapha_db::repositories::MemberRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_member(pool: &PgPool, name: &str, gender: &str) -> Member {
    let input = CreateMember {
        full_name: name.to_string(),
        gender: gender.to_string(),
        ..Default::default()
    };
    MemberRepo::create(pool, &input).await.unwrap()
}

async fn seed_couple(pool: &PgPool) -> (Member, Member) {
    let husband = seed_member(pool, "Nguyen Van An", "male").await;
    let wife = seed_member(pool, "Tran Thi Hoa", "female").await;
    (husband, wife)
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_marriage_returns_201(pool: PgPool) {
    let (husband, wife) = seed_couple(&pool).await;

    let app = common::build_test_app(pool);
    let token = common::admin_token();
    let body = serde_json::json!({
        "spouse1_id": husband.id,
        "spouse2_id": wife.id,
        "marriage_date": "1960-02-08"
    });
    let response = post_json_auth(app, "/api/v1/marriages", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["spouse1_id"], husband.id);
    assert_eq!(json["data"]["spouse2_id"], wife.id);
    assert_eq!(json["data"]["marriage_date"], "1960-02-08");
    assert_eq!(json["data"]["is_active"], true);
    assert_eq!(json["data"]["order_index"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_self_marriage_returns_400(pool: PgPool) {
    let member = seed_member(&pool, "An", "male").await;

    let app = common::build_test_app(pool);
    let token = common::admin_token();
    let body = serde_json::json!({ "spouse1_id": member.id, "spouse2_id": member.id });
    let response = post_json_auth(app, "/api/v1/marriages", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// A marriage referencing a member that does not exist is rejected by the
/// foreign keys and surfaces as 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_marriage_with_dangling_spouse_returns_400(pool: PgPool) {
    let member = seed_member(&pool, "An", "male").await;

    let app = common::build_test_app(pool);
    let token = common::admin_token();
    let body = serde_json::json!({ "spouse1_id": member.id, "spouse2_id": 999999 });
    let response = post_json_auth(app, "/api/v1/marriages", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_marriage_rejects_zero_order_index(pool: PgPool) {
    let (husband, wife) = seed_couple(&pool).await;

    let app = common::build_test_app(pool);
    let token = common::admin_token();
    let body = serde_json::json!({
        "spouse1_id": husband.id,
        "spouse2_id": wife.id,
        "order_index": 0
    });
    let response = post_json_auth(app, "/api/v1/marriages", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Recording a divorce is a partial update of the dates and active flag.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_marriage_records_divorce(pool: PgPool) {
    let (husband, wife) = seed_couple(&pool).await;

    let app = common::build_test_app(pool.clone());
    let token = common::admin_token();
    let response = post_json_auth(
        app,
        "/api/v1/marriages",
        serde_json::json!({ "spouse1_id": husband.id, "spouse2_id": wife.id }),
        &token,
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "divorce_date": "1975-04-30", "is_active": false });
    let response = put_json_auth(app, &format!("/api/v1/marriages/{id}"), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["divorce_date"], "1975-04-30");
    assert_eq!(json["data"]["is_active"], false);
    // Untouched fields keep their values.
    assert_eq!(json["data"]["spouse1_id"], husband.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_marriage_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::admin_token();
    let body = serde_json::json!({ "is_active": false });
    let response = put_json_auth(app, "/api/v1/marriages/999999", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_marriage(pool: PgPool) {
    let (husband, wife) = seed_couple(&pool).await;

    let app = common::build_test_app(pool.clone());
    let token = common::admin_token();
    let response = post_json_auth(
        app,
        "/api/v1/marriages",
        serde_json::json!({ "spouse1_id": husband.id, "spouse2_id": wife.id }),
        &token,
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/marriages/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], true);

    // Both spouses survive the unlink.
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM members")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_marriage_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::admin_token();
    let response = delete_auth(app, "/api/v1/marriages/999999", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
