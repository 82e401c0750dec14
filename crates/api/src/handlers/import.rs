//! Handler for the nested-JSON bulk import.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use giapha_core::error::CoreError;
use giapha_core::lineage::validate_order_index;
use giapha_core::member::{
    validate_birth_order, validate_calendar_type, validate_full_name, validate_gender,
    validate_relationship_kind,
};
use giapha_db::models::import::{ImportMember, ImportPayload, ImportSpouse, ImportStats};
use giapha_db::repositories::ImportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/import
///
/// Replaces the entire family with the nested payload. Every node is
/// validated up front so a bad entry deep in the tree rejects the request
/// before any row is touched; the replacement itself runs in one
/// transaction.
pub async fn import_family(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<ImportPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<ImportStats>>)> {
    validate_payload(&payload)?;

    let stats = ImportRepo::replace_all(&state.pool, &payload).await?;
    tracing::info!(
        members = stats.members,
        relationships = stats.relationships,
        marriages = stats.marriages,
        "family imported"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: stats })))
}

/// Walk every member and spouse in the payload and run the field
/// validators, so database check constraints never fire from this path.
fn validate_payload(payload: &ImportPayload) -> Result<(), AppError> {
    let mut stack: Vec<&ImportMember> = vec![&payload.root];
    while let Some(entry) = stack.pop() {
        validate_member_entry(entry)?;
        if let Some(ref spouses) = entry.spouses {
            for spouse in spouses {
                validate_spouse_entry(spouse)?;
            }
        }
        if let Some(ref children) = entry.children {
            stack.extend(children.iter());
        }
    }
    Ok(())
}

fn validate_member_entry(entry: &ImportMember) -> Result<(), CoreError> {
    validate_full_name(&entry.full_name)?;
    validate_gender(&entry.gender)?;
    if let Some(birth_order) = entry.birth_order {
        validate_birth_order(birth_order)?;
    }
    if let Some(ref t) = entry.birth_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = entry.death_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = entry.death_anniversary_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref kind) = entry.relationship_type {
        validate_relationship_kind(kind)?;
    }
    Ok(())
}

fn validate_spouse_entry(spouse: &ImportSpouse) -> Result<(), CoreError> {
    validate_full_name(&spouse.full_name)?;
    validate_gender(&spouse.gender)?;
    if let Some(ref t) = spouse.birth_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = spouse.death_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(order_index) = spouse.order_index {
        validate_order_index(order_index)?;
    }
    Ok(())
}
