//! Admin session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use giapha_core::error::CoreError;
use giapha_core::session::verify_session_token;

use crate::error::AppError;
use crate::state::AppState;

/// Proof of an authenticated admin session, extracted from a Bearer
/// token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that mutates data:
///
/// ```ignore
/// async fn my_handler(_session: AdminSession) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !verify_session_token(&state.config.auth.secret, token) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid session token".into(),
            )));
        }

        Ok(AdminSession)
    }
}
