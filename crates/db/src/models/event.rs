//! Family event entity model and DTOs.

use giapha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub member_id: DbId,
    pub title: String,
    pub date: Option<String>,
    pub calendar_type: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event joined with the name of the member it belongs to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventWithMember {
    pub id: DbId,
    pub member_id: DbId,
    pub title: String,
    pub date: Option<String>,
    pub calendar_type: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub member_name: String,
    pub member_generation: i32,
}

/// DTO for creating an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub member_id: DbId,
    pub title: String,
    pub date: Option<String>,
    /// Defaults to `solar` if omitted.
    pub calendar_type: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub calendar_type: Option<String>,
    pub description: Option<String>,
}

/// Query parameters for the event list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
    pub member_id: Option<DbId>,
}
