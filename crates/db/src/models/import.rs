//! Bulk import payload for seeding a whole family tree in one request.

use serde::{Deserialize, Serialize};

/// Root of the import payload. Importing replaces all existing data.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportPayload {
    pub family_name: Option<String>,
    pub root: ImportMember,
}

/// One member in the nested import tree.
///
/// Generation numbers are assigned during the walk (root is 1, children
/// are parent + 1); the payload does not carry them.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportMember {
    pub full_name: String,
    pub gender: String,
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
    /// Kind of link to the parent entry; defaults to `biological`.
    /// Ignored on the root.
    pub relationship_type: Option<String>,
    pub spouses: Option<Vec<ImportSpouse>>,
    pub children: Option<Vec<ImportMember>>,
}

/// A married-in spouse in the import tree. Spouses take the same
/// generation as the member they are married to.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportSpouse {
    pub full_name: String,
    pub gender: String,
    pub is_alive: Option<bool>,
    pub birth_date: Option<String>,
    pub birth_date_type: Option<String>,
    pub death_date: Option<String>,
    pub death_date_type: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub marriage_date: Option<String>,
    pub order_index: Option<i32>,
}

/// Row counts produced by a completed import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportStats {
    pub members: i64,
    pub relationships: i64,
    pub marriages: i64,
}
