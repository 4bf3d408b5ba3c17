//! Factory functions for session tokens.
//!
//! Tokens are real HS256 JWTs so the client's claim decoding sees the same segment
//! layout as production tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_JWT_SECRET, TEST_TOKEN_TTL},
    error::TestError,
};

/// Create claims with default test values and a 15-minute expiry.
pub fn mock_claims(user_id: i64, is_admin: bool) -> Value {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    json!({
        "user_id": user_id,
        "is_admin": is_admin,
        "exp": now + TEST_TOKEN_TTL,
    })
}

/// Create a signed token for the given user.
///
/// # Returns
/// - `Ok(String)` - Encoded JWT
/// - `Err(TestError::Jwt)` - Encoding failed
pub fn mock_token(user_id: i64, is_admin: bool) -> Result<String, TestError> {
    let claims = mock_claims(user_id, is_admin);

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )?)
}

/// Create a signed token from arbitrary claims, for malformed or partial claim sets.
pub fn mock_token_with_claims(claims: &Value) -> Result<String, TestError> {
    Ok(encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )?)
}
