//! Handlers for the `/events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use giapha_core::error::CoreError;
use giapha_core::member::validate_calendar_type;
use giapha_core::types::DbId;
use giapha_db::models::event::{CreateEvent, Event, EventQuery, EventWithMember, UpdateEvent};
use giapha_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// GET /api/v1/events
///
/// Newest first; `?member_id=` restricts to one member. Rows carry the
/// owning member's name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventQuery>,
) -> AppResult<Json<DataResponse<Vec<EventWithMember>>>> {
    let events = EventRepo::list_with_member(&state.pool, params.member_id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/events
///
/// `member_id` must reference an existing member; the foreign key rejects
/// dangling references with 400.
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event title must not be empty".into(),
        )));
    }
    if let Some(ref t) = input.calendar_type {
        validate_calendar_type(t)?;
    }

    let event = EventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    if let Some(ref title) = input.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Event title must not be empty".into(),
            )));
        }
    }
    if let Some(ref t) = input.calendar_type {
        validate_calendar_type(t)?;
    }

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeletedResponse { deleted: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))
    }
}
