//! Repository for the `marriages` table.

use giapha_core::types::DbId;
use sqlx::PgPool;

use crate::models::marriage::{CreateMarriage, Marriage, SpousePartner, UpdateMarriage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, spouse1_id, spouse2_id, marriage_date, divorce_date, is_active, order_index, created_at";

/// Joined column list for spouse lookups on the member detail page.
const PARTNER_COLUMNS: &str = "mr.id AS marriage_id, mr.marriage_date, mr.divorce_date, \
     mr.is_active, mr.order_index, \
     m.id, m.full_name, m.gender, m.generation, m.birth_order, m.is_alive, \
     m.birth_date, m.death_date, m.photo_url";

/// Provides CRUD operations for marriages.
pub struct MarriageRepo;

impl MarriageRepo {
    /// Insert a new marriage, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMarriage) -> Result<Marriage, sqlx::Error> {
        let query = format!(
            "INSERT INTO marriages (spouse1_id, spouse2_id, marriage_date, order_index)
             VALUES ($1, $2, $3, COALESCE($4, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Marriage>(&query)
            .bind(input.spouse1_id)
            .bind(input.spouse2_id)
            .bind(&input.marriage_date)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// All marriages ordered by ID. Feeds the tree builder.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Marriage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marriages ORDER BY id ASC");
        sqlx::query_as::<_, Marriage>(&query).fetch_all(pool).await
    }

    /// Find a marriage by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Marriage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marriages WHERE id = $1");
        sqlx::query_as::<_, Marriage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a marriage. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMarriage,
    ) -> Result<Option<Marriage>, sqlx::Error> {
        let query = format!(
            "UPDATE marriages SET
                marriage_date = COALESCE($2, marriage_date),
                divorce_date = COALESCE($3, divorce_date),
                is_active = COALESCE($4, is_active),
                order_index = COALESCE($5, order_index)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Marriage>(&query)
            .bind(id)
            .bind(&input.marriage_date)
            .bind(&input.divorce_date)
            .bind(input.is_active)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a marriage by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM marriages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Spouses of a member from either side of the pair, ordered by the
    /// marriage's order index.
    pub async fn list_partners_of(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<SpousePartner>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTNER_COLUMNS} FROM marriages mr
             JOIN members m ON m.id = CASE
                 WHEN mr.spouse1_id = $1 THEN mr.spouse2_id
                 ELSE mr.spouse1_id
             END
             WHERE mr.spouse1_id = $1 OR mr.spouse2_id = $1
             ORDER BY mr.order_index ASC, mr.id ASC"
        );
        sqlx::query_as::<_, SpousePartner>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }
}
