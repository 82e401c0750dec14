//! Marriage entity model and DTOs.

use giapha_core::tree::MarriageRecord;
use giapha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `marriages` table. The pair is stored once; lookups
/// match a member against either side.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Marriage {
    pub id: DbId,
    pub spouse1_id: DbId,
    pub spouse2_id: DbId,
    pub marriage_date: Option<String>,
    pub divorce_date: Option<String>,
    pub is_active: bool,
    pub order_index: i32,
    pub created_at: Timestamp,
}

impl Marriage {
    /// The bare pairing used by the tree builder.
    pub fn as_record(&self) -> MarriageRecord {
        MarriageRecord {
            spouse1_id: self.spouse1_id,
            spouse2_id: self.spouse2_id,
            marriage_date: self.marriage_date.clone(),
            order_index: self.order_index,
        }
    }
}

/// DTO for creating a marriage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMarriage {
    pub spouse1_id: DbId,
    pub spouse2_id: DbId,
    pub marriage_date: Option<String>,
    /// Position among the first spouse's marriages; defaults to 1.
    pub order_index: Option<i32>,
}

/// DTO for updating a marriage. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMarriage {
    pub marriage_date: Option<String>,
    pub divorce_date: Option<String>,
    pub is_active: Option<bool>,
    pub order_index: Option<i32>,
}

/// A spouse of a member, joined with the marriage connecting them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpousePartner {
    pub marriage_id: DbId,
    pub marriage_date: Option<String>,
    pub divorce_date: Option<String>,
    pub is_active: bool,
    pub order_index: i32,
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    pub generation: i32,
    pub birth_order: i32,
    pub is_alive: bool,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub photo_url: Option<String>,
}
