//! Route definitions for the assembled family tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::tree;
use crate::state::AppState;

/// Tree routes mounted at `/tree`.
///
/// ```text
/// GET /          -> get_tree (full reconstructed tree)
/// GET /search    -> search (?q=, matched + expanded ids)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tree::get_tree))
        .route("/search", get(tree::search))
}
