//! Handler for the aggregated family calendar.

use axum::extract::State;
use axum::Json;
use giapha_core::calendar::{anniversary_item, birthday_item, event_item, CalendarItem};
use giapha_db::repositories::{EventRepo, MemberRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// The three calendar sections plus a combined count.
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub anniversaries: Vec<CalendarItem>,
    pub birthdays: Vec<CalendarItem>,
    pub events: Vec<CalendarItem>,
    pub total: usize,
}

/// GET /api/v1/calendar
///
/// Death anniversaries of deceased members, birthdays of living members,
/// and all recorded events, each as uniform display items.
pub async fn get_calendar(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CalendarResponse>>> {
    let with_anniversaries = MemberRepo::list_with_anniversaries(&state.pool).await?;
    let with_birthdays = MemberRepo::list_with_birthdays(&state.pool).await?;
    let all_events = EventRepo::list_with_member(&state.pool, None).await?;

    let anniversaries: Vec<CalendarItem> = with_anniversaries
        .iter()
        .map(|m| {
            anniversary_item(
                m.id,
                &m.full_name,
                m.generation,
                m.death_anniversary.as_deref().unwrap_or_default(),
                &m.death_anniversary_type,
            )
        })
        .collect();

    let birthdays: Vec<CalendarItem> = with_birthdays
        .iter()
        .map(|m| {
            birthday_item(
                m.id,
                &m.full_name,
                m.generation,
                m.birth_date.as_deref().unwrap_or_default(),
                &m.birth_date_type,
            )
        })
        .collect();

    let events: Vec<CalendarItem> = all_events
        .iter()
        .map(|e| {
            event_item(
                e.member_id,
                &e.member_name,
                e.member_generation,
                &e.title,
                e.date.as_deref(),
                &e.calendar_type,
                e.description.as_deref(),
            )
        })
        .collect();

    let total = anniversaries.len() + birthdays.len() + events.len();
    Ok(Json(DataResponse {
        data: CalendarResponse {
            anniversaries,
            birthdays,
            events,
            total,
        },
    }))
}
