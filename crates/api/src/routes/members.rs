//! Route definitions for family members.

use axum::routing::get;
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

/// Member routes mounted at `/members`.
///
/// ```text
/// GET    /       -> list (?search=, ?generation=, ?limit=, ?offset=)
/// POST   /       -> create (admin only)
/// GET    /{id}   -> get_by_id (member plus relations)
/// PUT    /{id}   -> update (admin only)
/// DELETE /{id}   -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(members::list).post(members::create))
        .route(
            "/{id}",
            get(members::get_by_id)
                .put(members::update)
                .delete(members::delete),
        )
}
