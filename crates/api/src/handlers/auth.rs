//! Handlers for the `/auth` resource (login, session check).

use axum::extract::State;
use axum::Json;
use giapha_core::error::CoreError;
use giapha_core::session::{session_token, verify_admin_password};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Single-admin login: the submitted password is checked against the
/// configured admin password (as SHA-256 digests, so comparison time does
/// not depend on the input) and a deterministic HMAC session token is
/// returned on success.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let password = input
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing password".into()))?;

    if !verify_admin_password(&state.config.auth.admin_password, password) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Incorrect password".into(),
        )));
    }

    let token = session_token(&state.config.auth.secret);
    Ok(Json(LoginResponse { token }))
}

/// GET /api/v1/auth/session
///
/// Requires a valid Bearer token; reports the session as authenticated.
/// An invalid or missing token is rejected by the extractor with 401.
pub async fn session(_session: AdminSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: true,
    })
}
