//! Admin session tokens.
//!
//! The service has a single admin credential, so sessions are a
//! deterministic HMAC-SHA256 over a fixed message keyed by `AUTH_SECRET`:
//! every valid session shares one token, and rotating the secret revokes
//! them all at once. Verification is constant-time.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// The fixed message the session token signs.
const SESSION_MESSAGE: &str = "admin-session";

/// Compute the admin session token for the given secret: the hex-encoded
/// HMAC-SHA256 of the fixed session message.
pub fn session_token(secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(SESSION_MESSAGE.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a presented session token against the secret.
///
/// Returns `false` for anything that is not the hex MAC of the session
/// message: wrong secret, truncation, tampering, or non-hex input.
pub fn verify_session_token(secret: &str, token: &str) -> bool {
    let Some(raw) = hex::decode(token) else {
        return false;
    };
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(SESSION_MESSAGE.as_bytes());
    mac.verify_slice(&raw).is_ok()
}

/// Compare the presented admin password with the configured one without
/// leaking length or prefix timing: both sides are hashed to fixed-width
/// digests first, then compared bit-by-bit.
pub fn verify_admin_password(configured: &str, presented: &str) -> bool {
    let a = Sha256::digest(configured.as_bytes());
    let b = Sha256::digest(presented.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

// ---------------------------------------------------------------------------
// hex helpers (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; `None` if the input is not valid hex.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| s.get(i..i + 2).and_then(|p| u8::from_str_radix(p, 16).ok()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    // -- session tokens ------------------------------------------------------

    #[test]
    fn token_is_deterministic_per_secret() {
        assert_eq!(session_token(SECRET), session_token(SECRET));
        assert_ne!(session_token(SECRET), session_token("other-secret"));
    }

    #[test]
    fn token_is_sha256_hex() {
        let token = session_token(SECRET);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_token_verifies() {
        let token = session_token(SECRET);
        assert!(verify_session_token(SECRET, &token));
    }

    #[test]
    fn tampered_token_fails() {
        let mut token = session_token(SECRET);
        let flipped = if token.ends_with('0') { '1' } else { '0' };
        token.pop();
        token.push(flipped);
        assert!(!verify_session_token(SECRET, &token));
    }

    #[test]
    fn token_for_other_secret_fails() {
        let token = session_token("other-secret");
        assert!(!verify_session_token(SECRET, &token));
    }

    #[test]
    fn malformed_tokens_fail() {
        assert!(!verify_session_token(SECRET, ""));
        assert!(!verify_session_token(SECRET, "abc"));
        assert!(!verify_session_token(SECRET, "not-hex-at-all!"));
        assert!(!verify_session_token(SECRET, "zz".repeat(32).as_str()));
    }

    // -- password comparison -------------------------------------------------

    #[test]
    fn matching_password_accepted() {
        assert!(verify_admin_password("hunter2", "hunter2"));
    }

    #[test]
    fn wrong_password_rejected() {
        assert!(!verify_admin_password("hunter2", "hunter3"));
        assert!(!verify_admin_password("hunter2", ""));
        assert!(!verify_admin_password("hunter2", "hunter22"));
    }

    // -- hex helpers ---------------------------------------------------------

    #[test]
    fn hex_round_trip() {
        let bytes = [0u8, 15, 255, 128];
        let encoded = hex::encode(bytes);
        assert_eq!(encoded, "000fff80");
        assert_eq!(hex::decode(&encoded), Some(bytes.to_vec()));
    }

    #[test]
    fn hex_decode_rejects_bad_input() {
        assert!(hex::decode("0").is_none());
        assert!(hex::decode("0g").is_none());
        assert_eq!(hex::decode(""), Some(Vec::new()));
    }
}
