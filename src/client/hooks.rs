use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    session::{guard::Access, Session},
    store::SessionState,
};

pub fn use_session() -> Store<SessionState> {
    use_context::<Store<SessionState>>()
}

/// API client carrying the current session token
pub fn use_api() -> ApiClient {
    let api = use_context::<ApiClient>();
    let session = use_session();

    let token = session.read().token();
    api.with_token(token)
}

/// Runs `guard` against the session and redirects when access is refused
///
/// Returns whether the page may load its data.
pub fn use_guard(guard: fn(&Session) -> Access) -> bool {
    let session = use_session();
    let nav = navigator();

    let access = guard(&session.read().session);

    use_effect(move || {
        if let Access::Redirect(route) = guard(&session.read().session) {
            nav.replace(route);
        }
    });

    access == Access::Granted
}
