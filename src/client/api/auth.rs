use dioxus_logger::tracing;

use crate::{
    client::{
        api::{decode, ApiClient},
        error::Error,
    },
    model::api::{LoginDto, LoginRequest},
};

impl ApiClient {
    /// Exchanges credentials for a session token
    ///
    /// `POST /login`
    ///
    /// # Returns
    /// - `Ok(LoginDto)`: token and admin flag
    /// - `Err(Error::Rejected)`: invalid credentials, message is the backend's own text
    /// - `Err(Error::Network)`: backend unreachable
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginDto, Error> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;

        let login = decode::<LoginDto>(response).await?;

        tracing::debug!(is_admin = login.is_admin, "Login accepted by backend");

        Ok(login)
    }
}
