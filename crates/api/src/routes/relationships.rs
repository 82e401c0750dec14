//! Route definitions for parent-child links.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::relationships;
use crate::state::AppState;

/// Relationship routes mounted at `/relationships`.
///
/// ```text
/// POST   /       -> create (admin only; sweeps descendant generations)
/// DELETE /{id}   -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(relationships::create))
        .route("/{id}", delete(relationships::delete))
}
