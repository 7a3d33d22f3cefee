//! API key authentication middleware
//!
//! When the service is configured with a key, every operation call must
//! carry `Authorization: Bearer <key>`. Only the SHA-256 hash of the key is
//! kept in memory.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::AppState;

/// Hash an API key for storage and comparison
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Passes every request through when no key is configured.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.api_key_hash.as_deref() {
        let api_key = extract_api_key(&request).ok_or(AppError::Unauthorized)?;
        if hash_api_key(api_key) != expected {
            tracing::warn!(path = %request.uri().path(), "Rejected request with wrong API key");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
