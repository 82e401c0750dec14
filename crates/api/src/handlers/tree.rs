//! Handlers for the `/tree` resource.
//!
//! The tree is assembled per request from a transactional snapshot of
//! members, parent links, and marriages. Nothing is cached; a write that
//! lands between two reads simply shows up in the next one.

use axum::extract::{Query, State};
use axum::Json;
use giapha_core::lineage::ParentLink;
use giapha_core::tree::{build_family_tree, find_expanded_ids, search_tree, MarriageRecord, TreeNode};
use giapha_core::types::DbId;
use giapha_db::models::member::Member;
use giapha_db::repositories::TreeRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::TreeSearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Name-search outcome over the assembled tree. Both lists are sorted so
/// the payload is stable across requests.
#[derive(Debug, Serialize)]
pub struct TreeSearchResult {
    pub matched_ids: Vec<DbId>,
    pub expanded_ids: Vec<DbId>,
}

/// GET /api/v1/tree
///
/// `data` is `null` when there are no members or no generation-1 member to
/// root the tree at.
pub async fn get_tree(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<TreeNode<Member>>>>> {
    let snapshot = TreeRepo::load_snapshot(&state.pool).await?;
    let links: Vec<ParentLink> = snapshot.links.iter().map(|l| l.as_record()).collect();
    let marriages: Vec<MarriageRecord> =
        snapshot.marriages.iter().map(|m| m.as_record()).collect();

    let tree = build_family_tree(&snapshot.members, &links, &marriages);
    Ok(Json(DataResponse { data: tree }))
}

/// GET /api/v1/tree/search?q=...
///
/// Case-insensitive substring match over member and spouse names. With no
/// buildable tree or a blank query both lists come back empty.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<TreeSearchParams>,
) -> AppResult<Json<DataResponse<TreeSearchResult>>> {
    let snapshot = TreeRepo::load_snapshot(&state.pool).await?;
    let links: Vec<ParentLink> = snapshot.links.iter().map(|l| l.as_record()).collect();
    let marriages: Vec<MarriageRecord> =
        snapshot.marriages.iter().map(|m| m.as_record()).collect();

    let result = match build_family_tree(&snapshot.members, &links, &marriages) {
        Some(tree) => {
            let matched = search_tree(&tree, &params.q);
            let expanded = find_expanded_ids(&tree, &matched);
            let mut matched_ids: Vec<DbId> = matched.into_iter().collect();
            let mut expanded_ids: Vec<DbId> = expanded.into_iter().collect();
            matched_ids.sort_unstable();
            expanded_ids.sort_unstable();
            TreeSearchResult {
                matched_ids,
                expanded_ids,
            }
        }
        None => TreeSearchResult {
            matched_ids: Vec::new(),
            expanded_ids: Vec::new(),
        },
    };

    Ok(Json(DataResponse { data: result }))
}
