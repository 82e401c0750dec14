//! Family member entity model and DTOs.

use giapha_core::tree::TreePerson;
use giapha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A member row from the `members` table.
///
/// Date fields are free-form text because lunar-calendar dates do not
/// map onto a SQL `DATE`. The `*_type` columns record which calendar
/// the adjacent date is written in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    pub generation: i32,
    pub birth_order: i32,
    pub is_alive: bool,
    pub birth_date: Option<String>,
    pub birth_date_type: String,
    pub death_date: Option<String>,
    pub death_date_type: String,
    pub death_anniversary: Option<String>,
    pub death_anniversary_type: String,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub biography: Option<String>,
    pub grave_info: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TreePerson for Member {
    fn id(&self) -> DbId {
        self.id
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn gender(&self) -> &str {
        &self.gender
    }

    fn generation(&self) -> i32 {
        self.generation
    }

    fn birth_order(&self) -> i32 {
        self.birth_order
    }
}

/// DTO for creating a new member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMember {
    pub full_name: String,
    pub gender: String,
    /// Defaults to 1 (founding generation) if omitted.
    pub generation: Option<i32>,
    /// Defaults to 1 if omitted.
    pub birth_order: Option<i32>,
    /// Defaults to `true` if omitted.
    pub is_alive: Option<bool>,
    pub birth_date: Option<String>,
    /// Defaults to `solar` if omitted.
    pub birth_date_type: Option<String>,
    pub death_date: Option<String>,
    /// Defaults to `solar` if omitted.
    pub death_date_type: Option<String>,
    pub death_anniversary: Option<String>,
    /// Defaults to `lunar` if omitted; memorial days follow the lunar calendar.
    pub death_anniversary_type: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub biography: Option<String>,
    pub grave_info: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

/// DTO for updating an existing member. All fields are optional;
/// omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMember {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub generation: Option<i32>,
    pub birth_order: Option<i32>,
    pub is_alive: Option<bool>,
    pub birth_date: Option<String>,
    pub birth_date_type: Option<String>,
    pub death_date: Option<String>,
    pub death_date_type: Option<String>,
    pub death_anniversary: Option<String>,
    pub death_anniversary_type: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub biography: Option<String>,
    pub grave_info: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

/// Query parameters for the paginated member list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberQuery {
    /// Case-insensitive substring match on the full name.
    pub search: Option<String>,
    pub generation: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
