//! Handler for family statistics.

use axum::extract::State;
use axum::Json;
use giapha_db::models::stats::GenerationCount;
use giapha_db::repositories::StatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Entity totals plus a per-generation member breakdown.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub members: i64,
    pub relationships: i64,
    pub marriages: i64,
    pub events: i64,
    pub generations: Vec<GenerationCount>,
}

/// GET /api/v1/stats
pub async fn get_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<StatsResponse>>> {
    let counts = StatsRepo::entity_counts(&state.pool).await?;
    let generations = StatsRepo::generation_counts(&state.pool).await?;

    Ok(Json(DataResponse {
        data: StatsResponse {
            members: counts.members,
            relationships: counts.relationships,
            marriages: counts.marriages,
            events: counts.events,
            generations,
        },
    }))
}
