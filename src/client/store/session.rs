use crate::client::{
    error::Error,
    session::{
        storage::{platform_storage, SessionStorage},
        Session,
    },
};

/// Session shared by every page through context
///
/// Initialised once from durable storage when the app starts, then updated by login and
/// logout so the navbar and guards see the same state during a render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
}

impl SessionState {
    pub fn init() -> Self {
        Self::from_storage(&platform_storage())
    }

    pub fn from_storage<S: SessionStorage + ?Sized>(storage: &S) -> Self {
        Self {
            session: Session::get(storage),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.token.clone()
    }

    /// Replaces the state after a successful login
    pub fn login(&mut self, session: Session) {
        self.session = session;
    }

    /// Clears durable storage and the in-memory session
    ///
    /// The in-memory session is cleared even when storage fails so the user is logged out
    /// of the running app either way.
    pub fn logout<S: SessionStorage + ?Sized>(&mut self, storage: &S) -> Result<(), Error> {
        self.session = Session::default();

        Session::clear(storage)
    }
}
