//! Route definition for the family calendar.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Calendar routes mounted at `/calendar`.
///
/// ```text
/// GET /    -> get_calendar (anniversaries, birthdays, events)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(calendar::get_calendar))
}
