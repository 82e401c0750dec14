//! Handlers for the `/marriages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giapha_core::error::CoreError;
use giapha_core::lineage::{validate_order_index, validate_spouse_pair};
use giapha_core::types::DbId;
use giapha_db::models::marriage::{CreateMarriage, Marriage, UpdateMarriage};
use giapha_db::repositories::MarriageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// POST /api/v1/marriages
///
/// Both spouses must exist; a dangling reference is rejected with 400 by
/// the foreign keys.
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateMarriage>,
) -> AppResult<(StatusCode, Json<DataResponse<Marriage>>)> {
    validate_spouse_pair(input.spouse1_id, input.spouse2_id)?;
    if let Some(order_index) = input.order_index {
        validate_order_index(order_index)?;
    }

    let marriage = MarriageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: marriage })))
}

/// PUT /api/v1/marriages/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMarriage>,
) -> AppResult<Json<DataResponse<Marriage>>> {
    if let Some(order_index) = input.order_index {
        validate_order_index(order_index)?;
    }

    let marriage = MarriageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Marriage",
            id,
        }))?;
    Ok(Json(DataResponse { data: marriage }))
}

/// DELETE /api/v1/marriages/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = MarriageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeletedResponse { deleted: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Marriage",
            id,
        }))
    }
}
