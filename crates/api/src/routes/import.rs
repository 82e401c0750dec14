//! Route definition for the bulk family import.

use axum::routing::post;
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

/// Import routes mounted at `/import`.
///
/// ```text
/// POST /    -> import_family (admin only; replaces all data)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(import::import_family))
}
