//! Route definition for family statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Stats routes mounted at `/stats`.
///
/// ```text
/// GET /    -> get_stats (entity counts + generation distribution)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::get_stats))
}
