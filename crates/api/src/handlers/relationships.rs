//! Handlers for the `/relationships` resource.
//!
//! Creating a link re-derives the child's generation from the parent and
//! sweeps the change down through every descendant chain; the link insert
//! and all generation writes commit in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giapha_core::error::CoreError;
use giapha_core::lineage::{plan_generation_updates, validate_link_endpoints};
use giapha_core::member::validate_relationship_kind;
use giapha_core::types::DbId;
use giapha_db::models::relationship::{CreateParentLink, ParentLink};
use giapha_db::repositories::{MemberRepo, RelationshipRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// POST /api/v1/relationships
///
/// A duplicate parent-child pair is rejected with 409 by the unique
/// constraint on the table.
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateParentLink>,
) -> AppResult<(StatusCode, Json<DataResponse<ParentLink>>)> {
    validate_link_endpoints(input.parent_id, input.child_id)?;
    if let Some(ref kind) = input.relationship_type {
        validate_relationship_kind(kind)?;
    }

    let parent = MemberRepo::find_by_id(&state.pool, input.parent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: input.parent_id,
        }))?;
    MemberRepo::find_by_id(&state.pool, input.child_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: input.child_id,
        }))?;

    // Plan against the link set as it stands before this edge exists.
    let links = RelationshipRepo::list_all(&state.pool).await?;
    let records: Vec<_> = links.iter().map(|l| l.as_record()).collect();
    let plan = plan_generation_updates(&records, input.child_id, parent.generation + 1);

    if !plan.revisited.is_empty() {
        tracing::warn!(
            child_id = input.child_id,
            revisited = ?plan.revisited,
            "generation sweep reached members more than once; keeping first assignment"
        );
    }

    let link =
        RelationshipRepo::create_with_generation_updates(&state.pool, &input, &plan.updates)
            .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// DELETE /api/v1/relationships/{id}
///
/// Descendant generations are left untouched; the child may still hang
/// from its other parent.
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = RelationshipRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeletedResponse { deleted: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Relationship",
            id,
        }))
    }
}
