//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /tree/search` (`?q=`).
///
/// A missing `q` behaves like an empty one: no matches.
#[derive(Debug, Deserialize)]
pub struct TreeSearchParams {
    #[serde(default)]
    pub q: String,
}
