//! HTTP-level integration tests for the aggregated family calendar.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use giapha_db::models::member::{CreateMember, Member};
use giapha_db::repositories::MemberRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_living(pool: &PgPool, name: &str, birth_date: Option<&str>) -> Member {
    let input = CreateMember {
        full_name: name.to_string(),
        gender: "male".to_string(),
        birth_date: birth_date.map(str::to_string),
        ..Default::default()
    };
    MemberRepo::create(pool, &input).await.unwrap()
}

async fn seed_deceased(pool: &PgPool, name: &str, anniversary: Option<&str>) -> Member {
    let input = CreateMember {
        full_name: name.to_string(),
        gender: "male".to_string(),
        is_alive: Some(false),
        birth_date: Some("1920-01-01".to_string()),
        death_anniversary: anniversary.map(str::to_string),
        ..Default::default()
    };
    MemberRepo::create(pool, &input).await.unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_calendar(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/calendar").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["anniversaries"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["birthdays"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["events"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["total"], 0);
}

/// Each section carries its own kind of item and the total sums them.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calendar_collects_all_three_sections(pool: PgPool) {
    let ancestor = seed_deceased(&pool, "Nguyen Van To", Some("2000-03-15")).await;
    let living = seed_living(&pool, "Nguyen Van An", Some("1985-11-02")).await;

    sqlx::query("INSERT INTO events (member_id, title, date) VALUES ($1, $2, $3)")
        .bind(living.id)
        .bind("Tomb sweeping")
        .bind("2024-04-04")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/calendar").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    let anniversaries = data["anniversaries"].as_array().unwrap();
    assert_eq!(anniversaries.len(), 1);
    assert_eq!(anniversaries[0]["kind"], "anniversary");
    assert_eq!(anniversaries[0]["member_id"], ancestor.id);
    assert_eq!(anniversaries[0]["date"], "2000-03-15");
    assert_eq!(anniversaries[0]["calendar_type"], "lunar");
    assert_eq!(
        anniversaries[0]["label"],
        "Death anniversary of Nguyen Van To"
    );

    let birthdays = data["birthdays"].as_array().unwrap();
    assert_eq!(birthdays.len(), 1);
    assert_eq!(birthdays[0]["kind"], "birthday");
    assert_eq!(birthdays[0]["member_id"], living.id);
    assert_eq!(birthdays[0]["calendar_type"], "solar");
    assert_eq!(birthdays[0]["label"], "Birthday of Nguyen Van An");

    let events = data["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["kind"], "event");
    assert_eq!(events[0]["label"], "Tomb sweeping");
    assert_eq!(events[0]["member_name"], "Nguyen Van An");

    assert_eq!(data["total"], 3);
}

/// Deceased members without a recorded anniversary stay out of the
/// anniversary section, and their birth dates produce no birthday.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calendar_skips_unqualified_members(pool: PgPool) {
    seed_deceased(&pool, "Quiet Ancestor", None).await;
    seed_living(&pool, "No Birth Date", None).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/calendar").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["anniversaries"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["birthdays"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["total"], 0);
}
