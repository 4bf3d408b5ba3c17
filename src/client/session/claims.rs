use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

use crate::client::error::Error;

/// Claims the backend puts in its session tokens
///
/// The signature is never checked here, the claims are only read to pick a route.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decodes the payload segment of a JWT without verifying it
pub fn decode_claims(token: &str) -> Result<TokenClaims, Error> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return Err(Error::Token("expected three segments".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Error::Token(e.to_string()))?;

    serde_json::from_slice::<TokenClaims>(&bytes).map_err(|e| Error::Token(e.to_string()))
}
