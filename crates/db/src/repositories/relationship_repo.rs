//! Repository for the `parent_links` table.

use giapha_core::lineage::GenerationUpdate;
use giapha_core::types::DbId;
use sqlx::PgPool;

use crate::models::relationship::{CreateParentLink, ParentLink, RelatedMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_id, child_id, relationship_type, created_at";

/// Joined column list for parent/child lookups on the member detail page.
const RELATED_COLUMNS: &str = "pl.id AS link_id, pl.relationship_type, \
     m.id, m.full_name, m.gender, m.generation, m.birth_order, m.is_alive, \
     m.birth_date, m.death_date, m.photo_url";

/// Provides operations for parent-child links, including the combined
/// insert-and-renumber used when a link changes descendant generations.
pub struct RelationshipRepo;

impl RelationshipRepo {
    /// All links ordered by ID, oldest first. The tree builder resolves
    /// competing parent claims in this order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ParentLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parent_links ORDER BY id ASC");
        sqlx::query_as::<_, ParentLink>(&query).fetch_all(pool).await
    }

    /// Find a link by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ParentLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parent_links WHERE id = $1");
        sqlx::query_as::<_, ParentLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a link and apply the planned generation renumbering in one
    /// transaction. Either the link and every update land, or none do.
    pub async fn create_with_generation_updates(
        pool: &PgPool,
        input: &CreateParentLink,
        updates: &[GenerationUpdate],
    ) -> Result<ParentLink, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO parent_links (parent_id, child_id, relationship_type)
             VALUES ($1, $2, COALESCE($3, 'biological'))
             RETURNING {COLUMNS}"
        );
        let link = sqlx::query_as::<_, ParentLink>(&query)
            .bind(input.parent_id)
            .bind(input.child_id)
            .bind(&input.relationship_type)
            .fetch_one(&mut *tx)
            .await?;

        for update in updates {
            sqlx::query("UPDATE members SET generation = $2, updated_at = NOW() WHERE id = $1")
                .bind(update.member_id)
                .bind(update.generation)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(link)
    }

    /// Delete a link by ID. Returns `true` if a row was removed.
    ///
    /// Generations of the former descendants are left as they are; the
    /// child may still be reachable through its other parent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parent_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Parents of a member, oldest link first.
    pub async fn list_parents_of(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<RelatedMember>, sqlx::Error> {
        let query = format!(
            "SELECT {RELATED_COLUMNS} FROM parent_links pl
             JOIN members m ON m.id = pl.parent_id
             WHERE pl.child_id = $1
             ORDER BY pl.id ASC"
        );
        sqlx::query_as::<_, RelatedMember>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Children of a member in household order.
    pub async fn list_children_of(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<RelatedMember>, sqlx::Error> {
        let query = format!(
            "SELECT {RELATED_COLUMNS} FROM parent_links pl
             JOIN members m ON m.id = pl.child_id
             WHERE pl.parent_id = $1
             ORDER BY m.birth_order ASC, m.id ASC"
        );
        sqlx::query_as::<_, RelatedMember>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }
}
