//! Repository for the `members` table.

use giapha_core::member::{clamp_limit, clamp_offset, DEFAULT_MEMBER_LIMIT, MAX_MEMBER_LIMIT};
use giapha_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, MemberQuery, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, gender, generation, birth_order, is_alive, \
     birth_date, birth_date_type, death_date, death_date_type, \
     death_anniversary, death_anniversary_type, occupation, address, \
     biography, grave_info, notes, photo_url, created_at, updated_at";

/// Provides CRUD and calendar lookups for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    ///
    /// Generation and birth order default to 1, `is_alive` to true, and
    /// the calendar-type columns to their conventional calendars.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (full_name, gender, generation, birth_order, is_alive,
                birth_date, birth_date_type, death_date, death_date_type,
                death_anniversary, death_anniversary_type, occupation, address,
                biography, grave_info, notes, photo_url)
             VALUES ($1, $2, COALESCE($3, 1), COALESCE($4, 1), COALESCE($5, TRUE),
                $6, COALESCE($7, 'solar'), $8, COALESCE($9, 'solar'),
                $10, COALESCE($11, 'lunar'), $12, $13, $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(input.generation)
            .bind(input.birth_order)
            .bind(input.is_alive)
            .bind(&input.birth_date)
            .bind(&input.birth_date_type)
            .bind(&input.death_date)
            .bind(&input.death_date_type)
            .bind(&input.death_anniversary)
            .bind(&input.death_anniversary_type)
            .bind(&input.occupation)
            .bind(&input.address)
            .bind(&input.biography)
            .bind(&input.grave_info)
            .bind(&input.notes)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    /// Find a member by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List members with filtering and pagination.
    ///
    /// Ordered by generation, then birth order, then ID so siblings come
    /// out in household order.
    pub async fn query(pool: &PgPool, params: &MemberQuery) -> Result<Vec<Member>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_MEMBER_LIMIT, MAX_MEMBER_LIMIT);
        let offset = clamp_offset(params.offset);

        let (where_clause, bind_values, bind_idx) = build_member_filter(params);

        let query = format!(
            "SELECT {COLUMNS} FROM members {where_clause} \
             ORDER BY generation ASC, birth_order ASC, id ASC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_member_values(sqlx::query_as::<_, Member>(&query), &bind_values);
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count members matching the given filter (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &MemberQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_member_filter(params);

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM members {where_clause}");

        let q = bind_member_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(pool).await
    }

    /// Update a member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET
                full_name = COALESCE($2, full_name),
                gender = COALESCE($3, gender),
                generation = COALESCE($4, generation),
                birth_order = COALESCE($5, birth_order),
                is_alive = COALESCE($6, is_alive),
                birth_date = COALESCE($7, birth_date),
                birth_date_type = COALESCE($8, birth_date_type),
                death_date = COALESCE($9, death_date),
                death_date_type = COALESCE($10, death_date_type),
                death_anniversary = COALESCE($11, death_anniversary),
                death_anniversary_type = COALESCE($12, death_anniversary_type),
                occupation = COALESCE($13, occupation),
                address = COALESCE($14, address),
                biography = COALESCE($15, biography),
                grave_info = COALESCE($16, grave_info),
                notes = COALESCE($17, notes),
                photo_url = COALESCE($18, photo_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(input.generation)
            .bind(input.birth_order)
            .bind(input.is_alive)
            .bind(&input.birth_date)
            .bind(&input.birth_date_type)
            .bind(&input.death_date)
            .bind(&input.death_date_type)
            .bind(&input.death_anniversary)
            .bind(&input.death_anniversary_type)
            .bind(&input.occupation)
            .bind(&input.address)
            .bind(&input.biography)
            .bind(&input.grave_info)
            .bind(&input.notes)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member by ID. Returns `true` if a row was removed.
    ///
    /// Links, marriages, and events referencing the member are removed by
    /// `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deceased members with a recorded death anniversary, ordered by
    /// generation. Feeds the memorial-day section of the calendar.
    pub async fn list_with_anniversaries(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members
             WHERE death_anniversary IS NOT NULL AND is_alive = FALSE
             ORDER BY generation ASC, id ASC"
        );
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Living members with a recorded birth date, ordered by generation.
    pub async fn list_with_birthdays(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members
             WHERE birth_date IS NOT NULL AND is_alive = TRUE
             ORDER BY generation ASC, id ASC"
        );
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }
}

/// Typed bind value for dynamically-built member queries.
enum BindValue {
    Int(i32),
    Text(String),
}

/// Build a WHERE clause and bind values from `MemberQuery` filter parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_member_filter(params: &MemberQuery) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref search) = params.search {
        let trimmed = search.trim();
        if !trimmed.is_empty() {
            conditions.push(format!("full_name ILIKE ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Text(format!("%{trimmed}%")));
        }
    }

    if let Some(generation) = params.generation {
        conditions.push(format!("generation = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(generation));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_member_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_member_values_scalar<'q, O>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}
