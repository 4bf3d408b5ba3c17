//! Typed client for the Devla backend.
//!
//! One method per backend capability, split by domain: [`auth`] holds login and
//! [`course`] holds course and module management. Every method performs exactly one HTTP
//! request, there is no caching and no retry. Protected requests send the raw session
//! token as the `Authorization` header value (no scheme prefix) to match the backend.

pub mod auth;
pub mod course;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::{config::Config, error::Error},
    model::api::MessageDto,
};

pub use course::UploadTarget;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Returns a copy of the client that authenticates with `token`
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the session token if one is present
    fn maybe_authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => builder.header("Authorization", token.as_str()),
            None => builder,
        }
    }

    /// Attaches the session token, failing when the client has none
    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, Error> {
        let Some(ref token) = self.token else {
            return Err(Error::Unauthorized);
        };

        Ok(builder.header("Authorization", token.as_str()))
    }
}

/// Decodes a backend response into `T`
///
/// Non-success statuses become [`Error::Rejected`] carrying the backend's message (or the
/// raw body when it is not a message object). Success bodies must match `T`, anything else
/// is an [`Error::Decode`].
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<MessageDto>(&body) {
            Ok(dto) => dto.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => body,
        };

        return Err(Error::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str::<T>(&body)?)
}
