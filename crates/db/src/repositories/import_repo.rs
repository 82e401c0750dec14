//! Repository for the bulk family-tree import.

use giapha_core::types::DbId;
use sqlx::PgPool;

use crate::models::import::{ImportMember, ImportPayload, ImportSpouse, ImportStats};

/// Wipes the registry and rebuilds it from a nested import payload.
pub struct ImportRepo;

impl ImportRepo {
    /// Replace the entire registry with the members described by `payload`.
    ///
    /// Deletes events, parent links, marriages, and members, then walks
    /// the nested tree depth-first, inserting each member before its
    /// spouses and descendants. Everything runs in one transaction, so a
    /// failure part-way through leaves the previous data intact.
    pub async fn replace_all(
        pool: &PgPool,
        payload: &ImportPayload,
    ) -> Result<ImportStats, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM events").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM parent_links")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM marriages").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM members").execute(&mut *tx).await?;

        // Depth-first walk with an explicit stack; children are pushed in
        // reverse so siblings are inserted in listed order. Each entry
        // carries its fallback birth order (1-based position among its
        // siblings) for payloads that omit it.
        let mut stack: Vec<(&ImportMember, Option<DbId>, i32, i32)> =
            vec![(&payload.root, None, 1, 1)];

        while let Some((entry, parent_id, generation, position)) = stack.pop() {
            let birth_order = entry.birth_order.unwrap_or(position);
            let member_id = Self::insert_member(&mut tx, entry, generation, birth_order).await?;

            if let Some(parent_id) = parent_id {
                sqlx::query(
                    "INSERT INTO parent_links (parent_id, child_id, relationship_type)
                     VALUES ($1, $2, COALESCE($3, 'biological'))",
                )
                .bind(parent_id)
                .bind(member_id)
                .bind(&entry.relationship_type)
                .execute(&mut *tx)
                .await?;
            }

            if let Some(ref spouses) = entry.spouses {
                for (i, spouse) in spouses.iter().enumerate() {
                    let order_index = spouse.order_index.unwrap_or(i as i32 + 1);
                    let spouse_id = Self::insert_spouse(&mut tx, spouse, generation).await?;
                    sqlx::query(
                        "INSERT INTO marriages (spouse1_id, spouse2_id, marriage_date, order_index)
                         VALUES ($1, $2, $3, $4)",
                    )
                    .bind(member_id)
                    .bind(spouse_id)
                    .bind(&spouse.marriage_date)
                    .bind(order_index)
                    .execute(&mut *tx)
                    .await?;
                }
            }

            if let Some(ref children) = entry.children {
                for (i, child) in children.iter().enumerate().rev() {
                    stack.push((child, Some(member_id), generation + 1, i as i32 + 1));
                }
            }
        }

        let members = Self::count_table(&mut tx, "members").await?;
        let relationships = Self::count_table(&mut tx, "parent_links").await?;
        let marriages = Self::count_table(&mut tx, "marriages").await?;

        tx.commit().await?;

        Ok(ImportStats {
            members,
            relationships,
            marriages,
        })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert one tree member within the import transaction.
    async fn insert_member(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        entry: &ImportMember,
        generation: i32,
        birth_order: i32,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO members (full_name, gender, generation, birth_order, is_alive,
                birth_date, birth_date_type, death_date, death_date_type,
                death_anniversary, death_anniversary_type, occupation, address,
                biography, grave_info, notes)
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE),
                $6, COALESCE($7, 'solar'), $8, COALESCE($9, 'solar'),
                $10, COALESCE($11, 'lunar'), $12, $13, $14, $15, $16)
             RETURNING id",
        )
        .bind(&entry.full_name)
        .bind(&entry.gender)
        .bind(generation)
        .bind(birth_order)
        .bind(entry.is_alive)
        .bind(&entry.birth_date)
        .bind(&entry.birth_date_type)
        .bind(&entry.death_date)
        .bind(&entry.death_date_type)
        .bind(&entry.death_anniversary)
        .bind(&entry.death_anniversary_type)
        .bind(&entry.occupation)
        .bind(&entry.address)
        .bind(&entry.biography)
        .bind(&entry.grave_info)
        .bind(&entry.notes)
        .fetch_one(&mut **tx)
        .await
    }

    /// Insert a married-in spouse within the import transaction. Spouses
    /// take the generation of the member they marry.
    async fn insert_spouse(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        spouse: &ImportSpouse,
        generation: i32,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO members (full_name, gender, generation, birth_order, is_alive,
                birth_date, birth_date_type, death_date, death_date_type,
                occupation, address, notes)
             VALUES ($1, $2, $3, 1, COALESCE($4, TRUE),
                $5, COALESCE($6, 'solar'), $7, COALESCE($8, 'solar'),
                $9, $10, $11)
             RETURNING id",
        )
        .bind(&spouse.full_name)
        .bind(&spouse.gender)
        .bind(generation)
        .bind(spouse.is_alive)
        .bind(&spouse.birth_date)
        .bind(&spouse.birth_date_type)
        .bind(&spouse.death_date)
        .bind(&spouse.death_date_type)
        .bind(&spouse.occupation)
        .bind(&spouse.address)
        .bind(&spouse.notes)
        .fetch_one(&mut **tx)
        .await
    }

    async fn count_table(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        table: &str,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT FROM {table}");
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&mut **tx)
            .await
    }
}
