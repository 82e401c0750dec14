//! Aggregate queries for the statistics endpoint.

use sqlx::PgPool;

use crate::models::stats::{EntityCounts, GenerationCount};

/// Read-only aggregates over the whole registry.
pub struct StatsRepo;

impl StatsRepo {
    /// Row counts for every family table, read in one statement.
    pub async fn entity_counts(pool: &PgPool) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as::<_, EntityCounts>(
            "SELECT
                (SELECT COUNT(*)::BIGINT FROM members) AS members,
                (SELECT COUNT(*)::BIGINT FROM parent_links) AS relationships,
                (SELECT COUNT(*)::BIGINT FROM marriages) AS marriages,
                (SELECT COUNT(*)::BIGINT FROM events) AS events",
        )
        .fetch_one(pool)
        .await
    }

    /// Member counts grouped by generation, earliest generation first.
    pub async fn generation_counts(pool: &PgPool) -> Result<Vec<GenerationCount>, sqlx::Error> {
        sqlx::query_as::<_, GenerationCount>(
            "SELECT generation, COUNT(*)::BIGINT AS count
             FROM members
             GROUP BY generation
             ORDER BY generation ASC",
        )
        .fetch_all(pool)
        .await
    }
}
