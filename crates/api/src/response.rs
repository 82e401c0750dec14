//! Shared response envelope types for API handlers.
//!
//! All read responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated list envelope: `{ "data": [...], "total": N }`.
///
/// `total` is the match count before pagination so clients can page.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
}

/// Response body for successful deletes: `{ "deleted": true }`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
