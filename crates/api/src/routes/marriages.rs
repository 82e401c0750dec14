//! Route definitions for marriages.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::marriages;
use crate::state::AppState;

/// Marriage routes mounted at `/marriages`.
///
/// ```text
/// POST   /       -> create (admin only)
/// PUT    /{id}   -> update (admin only)
/// DELETE /{id}   -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(marriages::create))
        .route("/{id}", put(marriages::update).delete(marriages::delete))
}
