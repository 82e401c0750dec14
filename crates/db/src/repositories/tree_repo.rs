//! Consistent snapshot reads for the tree builder.

use sqlx::PgPool;

use crate::models::marriage::Marriage;
use crate::models::member::Member;
use crate::models::relationship::ParentLink;

const MEMBER_COLUMNS: &str = "id, full_name, gender, generation, birth_order, is_alive, \
     birth_date, birth_date_type, death_date, death_date_type, \
     death_anniversary, death_anniversary_type, occupation, address, \
     biography, grave_info, notes, photo_url, created_at, updated_at";

const LINK_COLUMNS: &str = "id, parent_id, child_id, relationship_type, created_at";

const MARRIAGE_COLUMNS: &str =
    "id, spouse1_id, spouse2_id, marriage_date, divorce_date, is_active, order_index, created_at";

/// Everything the tree builder needs, read in one transaction so the
/// three tables agree with each other.
#[derive(Debug, Clone)]
pub struct TreeSnapshot {
    pub members: Vec<Member>,
    pub links: Vec<ParentLink>,
    pub marriages: Vec<Marriage>,
}

/// Loads whole-family snapshots.
pub struct TreeRepo;

impl TreeRepo {
    /// Read members, parent links, and marriages inside a single
    /// transaction. Rows come back in ID order so tree assembly is
    /// deterministic.
    pub async fn load_snapshot(pool: &PgPool) -> Result<TreeSnapshot, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let members_query = format!("SELECT {MEMBER_COLUMNS} FROM members ORDER BY id ASC");
        let members = sqlx::query_as::<_, Member>(&members_query)
            .fetch_all(&mut *tx)
            .await?;

        let links_query = format!("SELECT {LINK_COLUMNS} FROM parent_links ORDER BY id ASC");
        let links = sqlx::query_as::<_, ParentLink>(&links_query)
            .fetch_all(&mut *tx)
            .await?;

        let marriages_query = format!("SELECT {MARRIAGE_COLUMNS} FROM marriages ORDER BY id ASC");
        let marriages = sqlx::query_as::<_, Marriage>(&marriages_query)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TreeSnapshot {
            members,
            links,
            marriages,
        })
    }
}
