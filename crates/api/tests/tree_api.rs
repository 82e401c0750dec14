//! HTTP-level integration tests for the assembled tree and name search.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use giapha_db::models::member::{CreateMember, Member};
use giapha_db::repositories::MemberRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_member(
    pool: &PgPool,
    name: &str,
    gender: &str,
    generation: i32,
    birth_order: i32,
) -> Member {
    let input = CreateMember {
        full_name: name.to_string(),
        gender: gender.to_string(),
        generation: Some(generation),
        birth_order: Some(birth_order),
        ..Default::default()
    };
    MemberRepo::create(pool, &input).await.unwrap()
}

async fn seed_link(pool: &PgPool, parent_id: i64, child_id: i64) {
    sqlx::query("INSERT INTO parent_links (parent_id, child_id) VALUES ($1, $2)")
        .bind(parent_id)
        .bind(child_id)
        .execute(pool)
        .await
        .unwrap();
}

async fn seed_marriage(pool: &PgPool, spouse1_id: i64, spouse2_id: i64) {
    sqlx::query("INSERT INTO marriages (spouse1_id, spouse2_id) VALUES ($1, $2)")
        .bind(spouse1_id)
        .bind(spouse2_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Three generations: a rooted couple, two children, one grandchild.
/// Returns (grandfather, grandmother, first child, second child, grandchild).
async fn seed_family(pool: &PgPool) -> (Member, Member, Member, Member, Member) {
    let gf = seed_member(pool, "Nguyen Van An", "male", 1, 1).await;
    let gm = seed_member(pool, "Tran Thi Hoa", "female", 1, 1).await;
    let c1 = seed_member(pool, "Nguyen Van Binh", "male", 2, 1).await;
    let c2 = seed_member(pool, "Nguyen Thi Cuc", "female", 2, 2).await;
    let gc = seed_member(pool, "Nguyen Thi Lan", "female", 3, 1).await;

    seed_marriage(pool, gf.id, gm.id).await;
    seed_link(pool, gf.id, c1.id).await;
    seed_link(pool, gf.id, c2.id).await;
    seed_link(pool, c1.id, gc.id).await;

    (gf, gm, c1, c2, gc)
}

// ---------------------------------------------------------------------------
// Tree assembly
// ---------------------------------------------------------------------------

/// No members means no tree: `data` is null, not an error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_database_returns_null_tree(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tree_assembles_three_generations(pool: PgPool) {
    let (gf, gm, c1, c2, gc) = seed_family(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let root = &json["data"];
    assert_eq!(root["member"]["id"], gf.id);
    assert_eq!(root["generation"], 1);

    // The wife hangs off the root as a spouse entry, not a node.
    let spouses = root["spouses"].as_array().unwrap();
    assert_eq!(spouses.len(), 1);
    assert_eq!(spouses[0]["member"]["id"], gm.id);

    // Children in birth order, grandchild nested one level down.
    let children = root["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["member"]["id"], c1.id);
    assert_eq!(children[1]["member"]["id"], c2.id);
    assert_eq!(children[0]["children"][0]["member"]["id"], gc.id);
    assert_eq!(children[0]["children"][0]["generation"], 3);
}

/// A member recorded as spouse2 never becomes the root while a blood
/// candidate exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_married_in_spouse_does_not_root_the_tree(pool: PgPool) {
    // The wife ranks equal on generation but is recorded as spouse2.
    let husband = seed_member(&pool, "Nguyen Van An", "male", 1, 2).await;
    let wife = seed_member(&pool, "Tran Thi Hoa", "female", 1, 1).await;
    seed_marriage(&pool, husband.id, wife.id).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["member"]["id"], husband.id);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A hit deep in the tree reports the match plus every ancestor to expand.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_returns_matched_and_expanded_ids(pool: PgPool) {
    let (gf, _gm, c1, _c2, gc) = seed_family(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree/search?q=lan").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["matched_ids"], serde_json::json!([gc.id]));

    let mut expected = vec![gf.id, c1.id, gc.id];
    expected.sort_unstable();
    assert_eq!(json["data"]["expanded_ids"], serde_json::json!(expected));
}

/// Spouse names participate in the search.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_spouse_names(pool: PgPool) {
    let (gf, gm, _c1, _c2, _gc) = seed_family(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree/search?q=hoa").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["matched_ids"], serde_json::json!([gm.id]));
    let expanded = json["data"]["expanded_ids"].as_array().unwrap();
    assert!(expanded.contains(&serde_json::json!(gf.id)));
    assert!(expanded.contains(&serde_json::json!(gm.id)));
}

/// A blank or missing query matches nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_query_is_empty(pool: PgPool) {
    seed_family(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/tree/search").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["matched_ids"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["expanded_ids"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree/search?q=%20%20").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["matched_ids"].as_array().unwrap().len(), 0);
}

/// Searching an empty family yields empty lists, not an error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_with_no_tree_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tree/search?q=an").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["matched_ids"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["expanded_ids"].as_array().unwrap().len(), 0);
}
