//! Admin session configuration.
//!
//! The token and password primitives themselves live in
//! `giapha_core::session`; this module only carries the secrets they
//! are keyed with.

/// HMAC session secret and admin password, loaded from the environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key for HMAC-SHA256 session tokens.
    pub secret: String,
    /// The single admin password accepted by `POST /auth/login`.
    pub admin_password: String,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var          | Default    |
    /// |------------------|------------|
    /// | `AUTH_SECRET`    | (required) |
    /// | `ADMIN_PASSWORD` | (required) |
    ///
    /// Both are required; missing values panic at startup so a
    /// misconfigured deployment never serves an unprotected admin API.
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_SECRET").expect("AUTH_SECRET must be set");
        let admin_password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

        Self {
            secret,
            admin_password,
        }
    }
}
