//! Route guards for protected pages.
//!
//! Guards only decide where the user is sent, they do not protect any data. The backend
//! checks the token on every protected request.

use dioxus_logger::tracing;

use crate::client::{
    router::Route,
    session::{claims::decode_claims, Session},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// Pages for logged in users, anyone else is sent to the login page
pub fn require_session(session: &Session) -> Access {
    if session.logged_in {
        Access::Granted
    } else {
        Access::Redirect(Route::Login {})
    }
}

/// Admin page guard
///
/// The admin claim is read from the token itself rather than from the stored flag. An
/// undecodable token sends the user back to login, a non-admin token to the course list.
pub fn require_admin(session: &Session) -> Access {
    let Some(token) = session.token.as_deref().filter(|_| session.logged_in) else {
        return Access::Redirect(Route::Login {});
    };

    match decode_claims(token) {
        Ok(claims) if claims.is_admin => Access::Granted,
        Ok(_) => Access::Redirect(Route::Courses {}),
        Err(err) => {
            tracing::error!("{}", err);
            Access::Redirect(Route::Login {})
        }
    }
}
