use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        error::Error,
        router::Route,
        session::{storage::SessionStorage, Session},
    },
    model::api::LoginRequest,
};

/// Login form contents and the message shown above it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub form: LoginRequest,
    pub error: Option<String>,
}

impl LoginState {
    /// Shows a failed login attempt to the user
    pub fn fail(&mut self, err: &Error) {
        tracing::error!(status = ?err.status(), "Login failed: {}", err);

        self.error = Some(err.user_message());
    }
}

/// Result of a successful login
#[derive(Clone, Debug, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    /// Admins land on the admin panel, everyone else on the course list
    pub redirect: Route,
}

pub struct LoginService<'a, S: SessionStorage + ?Sized> {
    api: &'a ApiClient,
    storage: &'a S,
}

impl<'a, S: SessionStorage + ?Sized> LoginService<'a, S> {
    pub fn new(api: &'a ApiClient, storage: &'a S) -> Self {
        Self { api, storage }
    }

    /// Logs in and persists the returned session
    ///
    /// Nothing is written to storage unless the backend accepted the credentials.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)`: session stored, with the route to continue to
    /// - `Err(Error::Rejected)`: credentials refused, message is the backend's
    /// - `Err(Error)`: network, decode or storage failure
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginOutcome, Error> {
        let login = self.api.login(credentials).await?;

        let session = Session::insert(self.storage, &login.token, login.is_admin)?;

        let redirect = if login.is_admin {
            Route::Admin {}
        } else {
            Route::Courses {}
        };

        Ok(LoginOutcome { session, redirect })
    }
}
