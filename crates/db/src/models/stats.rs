//! Aggregate rows for the statistics endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts across the four family tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntityCounts {
    pub members: i64,
    pub relationships: i64,
    pub marriages: i64,
    pub events: i64,
}

/// Member count for a single generation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GenerationCount {
    pub generation: i32,
    pub count: i64,
}
