//! Handlers for the `/members` resource.
//!
//! List and detail are public; writes require an admin session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use giapha_core::error::CoreError;
use giapha_core::member::{
    validate_birth_order, validate_calendar_type, validate_full_name, validate_gender,
    validate_generation,
};
use giapha_core::types::DbId;
use giapha_db::models::event::Event;
use giapha_db::models::marriage::SpousePartner;
use giapha_db::models::member::{CreateMember, Member, MemberQuery, UpdateMember};
use giapha_db::models::relationship::RelatedMember;
use giapha_db::repositories::{EventRepo, MarriageRepo, MemberRepo, RelationshipRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, DeletedResponse, ListResponse};
use crate::state::AppState;

/// A member plus every relation the detail view shows.
#[derive(Debug, Serialize)]
pub struct MemberDetail {
    pub member: Member,
    pub parents: Vec<RelatedMember>,
    pub children: Vec<RelatedMember>,
    pub spouses: Vec<SpousePartner>,
    pub events: Vec<Event>,
}

/// GET /api/v1/members
///
/// Supports `search` (name substring), `generation`, and `limit`/`offset`
/// pagination. `total` counts matches before pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MemberQuery>,
) -> AppResult<Json<ListResponse<Member>>> {
    let members = MemberRepo::query(&state.pool, &params).await?;
    let total = MemberRepo::count(&state.pool, &params).await?;

    Ok(Json(ListResponse {
        data: members,
        total,
    }))
}

/// GET /api/v1/members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MemberDetail>>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;

    let parents = RelationshipRepo::list_parents_of(&state.pool, id).await?;
    let children = RelationshipRepo::list_children_of(&state.pool, id).await?;
    let spouses = MarriageRepo::list_partners_of(&state.pool, id).await?;
    let events = EventRepo::list_for_member(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: MemberDetail {
            member,
            parents,
            children,
            spouses,
            events,
        },
    }))
}

/// POST /api/v1/members
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<DataResponse<Member>>)> {
    validate_create(&input)?;
    let member = MemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/v1/members/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMember>,
) -> AppResult<Json<DataResponse<Member>>> {
    validate_update(&input)?;
    let member = MemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;
    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/members/{id}
///
/// Parent links, marriages, and events referencing the member go with it
/// via `ON DELETE CASCADE`.
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = MemberRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeletedResponse { deleted: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateMember) -> Result<(), AppError> {
    validate_full_name(&input.full_name)?;
    validate_gender(&input.gender)?;
    if let Some(generation) = input.generation {
        validate_generation(generation)?;
    }
    if let Some(birth_order) = input.birth_order {
        validate_birth_order(birth_order)?;
    }
    if let Some(ref t) = input.birth_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = input.death_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = input.death_anniversary_type {
        validate_calendar_type(t)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateMember) -> Result<(), AppError> {
    if let Some(ref full_name) = input.full_name {
        validate_full_name(full_name)?;
    }
    if let Some(ref gender) = input.gender {
        validate_gender(gender)?;
    }
    if let Some(generation) = input.generation {
        validate_generation(generation)?;
    }
    if let Some(birth_order) = input.birth_order {
        validate_birth_order(birth_order)?;
    }
    if let Some(ref t) = input.birth_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = input.death_date_type {
        validate_calendar_type(t)?;
    }
    if let Some(ref t) = input.death_anniversary_type {
        validate_calendar_type(t)?;
    }
    Ok(())
}
