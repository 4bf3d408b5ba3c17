use serde::{Deserialize, Deserializer, Serialize};

/// Credentials sent to the login endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub token: String,
    /// Missing or `null` for accounts registered without the flag
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_admin: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Status message returned by write endpoints and by most failures
///
/// A few backend routes report failures under `error` instead of `message`, both are
/// accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(alias = "error")]
    pub message: String,
}

/// Response of the image upload endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageUploadDto {
    pub image_url: String,
}
