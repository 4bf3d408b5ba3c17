//! Client-held session.
//!
//! The session is the token returned by a successful login plus the admin flag the
//! backend sent with it, both persisted under the `token` and `isAdmin` keys of durable
//! storage. There is no expiry or refresh handling, a token is used until the backend
//! rejects it.

pub mod claims;
pub mod guard;
pub mod storage;

use dioxus_logger::tracing;

use crate::client::{error::Error, session::storage::SessionStorage};

/// Storage key holding the raw session token
pub const SESSION_TOKEN_KEY: &str = "token";

/// Storage key holding the admin flag as `"true"` or `"false"`
pub const SESSION_IS_ADMIN_KEY: &str = "isAdmin";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub logged_in: bool,
    pub is_admin: bool,
    pub token: Option<String>,
}

impl Session {
    /// Reads the session from storage.
    ///
    /// Unreadable storage is logged and treated as logged out.
    pub fn get<S: SessionStorage + ?Sized>(storage: &S) -> Session {
        let read = || -> Result<Session, Error> {
            let token = storage
                .get(SESSION_TOKEN_KEY)?
                .filter(|token| !token.is_empty());
            let is_admin = storage.get(SESSION_IS_ADMIN_KEY)?.as_deref() == Some("true");

            Ok(match token {
                Some(token) => Session {
                    logged_in: true,
                    is_admin,
                    token: Some(token),
                },
                None => Session::default(),
            })
        };

        read().unwrap_or_else(|err| {
            tracing::error!("Failed to read session: {}", err);
            Session::default()
        })
    }

    /// Persists the token and admin flag of a successful login.
    ///
    /// # Returns
    /// - `Ok(Session)`: the stored session
    /// - `Err(Error::Storage)`: storage failed to write
    pub fn insert<S: SessionStorage + ?Sized>(
        storage: &S,
        token: &str,
        is_admin: bool,
    ) -> Result<Session, Error> {
        storage.set(SESSION_TOKEN_KEY, token)?;
        storage.set(SESSION_IS_ADMIN_KEY, if is_admin { "true" } else { "false" })?;

        Ok(Session {
            logged_in: true,
            is_admin,
            token: Some(token.to_string()),
        })
    }

    /// Removes the token and admin flag from storage
    pub fn clear<S: SessionStorage + ?Sized>(storage: &S) -> Result<(), Error> {
        storage.remove(SESSION_TOKEN_KEY)?;
        storage.remove(SESSION_IS_ADMIN_KEY)?;

        Ok(())
    }
}
