//! Route definitions for family events.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event routes mounted at `/events`.
///
/// ```text
/// GET    /       -> list (?member_id=)
/// POST   /       -> create (admin only)
/// PUT    /{id}   -> update (admin only)
/// DELETE /{id}   -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(events::create))
        .route("/{id}", put(events::update).delete(events::delete))
}
