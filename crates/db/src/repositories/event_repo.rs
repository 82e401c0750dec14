//! Repository for the `events` table.

use giapha_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, EventWithMember, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, member_id, title, date, calendar_type, description, created_at, updated_at";

/// Joined column list carrying the owning member's name.
const WITH_MEMBER_COLUMNS: &str = "e.id, e.member_id, e.title, e.date, e.calendar_type, \
     e.description, e.created_at, e.updated_at, \
     m.full_name AS member_name, m.generation AS member_generation";

/// Provides CRUD operations for family events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (member_id, title, date, calendar_type, description)
             VALUES ($1, $2, $3, COALESCE($4, 'solar'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.member_id)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.calendar_type)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events newest first, optionally restricted to one member.
    /// Each row carries the owning member's name for display.
    pub async fn list_with_member(
        pool: &PgPool,
        member_id: Option<DbId>,
    ) -> Result<Vec<EventWithMember>, sqlx::Error> {
        let query = match member_id {
            Some(_) => format!(
                "SELECT {WITH_MEMBER_COLUMNS} FROM events e
                 JOIN members m ON m.id = e.member_id
                 WHERE e.member_id = $1
                 ORDER BY e.created_at DESC, e.id DESC"
            ),
            None => format!(
                "SELECT {WITH_MEMBER_COLUMNS} FROM events e
                 JOIN members m ON m.id = e.member_id
                 ORDER BY e.created_at DESC, e.id DESC"
            ),
        };

        let mut q = sqlx::query_as::<_, EventWithMember>(&query);
        if let Some(id) = member_id {
            q = q.bind(id);
        }
        q.fetch_all(pool).await
    }

    /// Events belonging to one member, earliest date first. Undated
    /// events sort last.
    pub async fn list_for_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE member_id = $1
             ORDER BY date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                date = COALESCE($3, date),
                calendar_type = COALESCE($4, calendar_type),
                description = COALESCE($5, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.calendar_type)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
