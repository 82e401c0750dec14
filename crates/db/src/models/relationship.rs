//! Parent-child link entity model and DTOs.

use giapha_core::lineage;
use giapha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `parent_links` table. The link is directed: `parent_id`
/// is one generation above `child_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParentLink {
    pub id: DbId,
    pub parent_id: DbId,
    pub child_id: DbId,
    pub relationship_type: String,
    pub created_at: Timestamp,
}

impl ParentLink {
    /// The bare edge used by the tree builder and generation planner.
    pub fn as_record(&self) -> lineage::ParentLink {
        lineage::ParentLink {
            parent_id: self.parent_id,
            child_id: self.child_id,
        }
    }
}

/// DTO for creating a parent-child link.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParentLink {
    pub parent_id: DbId,
    pub child_id: DbId,
    /// Defaults to `biological` if omitted.
    pub relationship_type: Option<String>,
}

/// A parent or child of a member, joined with the link between them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RelatedMember {
    pub link_id: DbId,
    pub relationship_type: String,
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
