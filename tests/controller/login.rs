use devla::{
    client::{
        controller::{LoginService, LoginState},
        router::Route,
        session::{
            storage::{MemoryStorage, SessionStorage},
            Session, SESSION_IS_ADMIN_KEY, SESSION_TOKEN_KEY,
        },
        store::SessionState,
    },
    model::api::LoginRequest,
};
use devla_test_utils::constant::{TEST_EMAIL, TEST_PASSWORD};

use super::*;

fn credentials() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Expect a non-admin login to persist the session and continue to the course list
#[tokio::test]
async fn persists_session_for_student() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint("abc", false, 1)
        .build()
        .await?;
    let api = api_for(&test, None);
    let storage = MemoryStorage::new();

    let outcome = LoginService::new(&api, &storage)
        .login(&credentials())
        .await
        .expect("login should succeed");

    assert_eq!(outcome.redirect, Route::Courses {});
    assert_eq!(outcome.redirect.to_string(), "/courses");
    assert_eq!(storage.get(SESSION_TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    assert_eq!(
        storage.get(SESSION_IS_ADMIN_KEY).unwrap().as_deref(),
        Some("false")
    );
    assert_eq!(Session::get(&storage), outcome.session);
    test.assert_mocks();

    Ok(())
}

/// Expect an admin login to continue to the admin panel
#[tokio::test]
async fn redirects_admin_to_panel() -> Result<(), TestError> {
    let token = jwt::mock_token(1, true)?;
    let test = TestBuilder::new()
        .with_login_endpoint(token.clone(), true, 1)
        .build()
        .await?;
    let api = api_for(&test, None);
    let storage = MemoryStorage::new();

    let outcome = LoginService::new(&api, &storage)
        .login(&credentials())
        .await
        .expect("login should succeed");

    assert_eq!(outcome.redirect, Route::Admin {});
    assert!(outcome.session.is_admin);
    assert_eq!(outcome.session.token.as_deref(), Some(token.as_str()));

    Ok(())
}

/// Expect rejected credentials to persist nothing and show the backend's message
#[tokio::test]
async fn stores_nothing_on_rejection() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_error_endpoint("POST", "/login", 401, "invalid credentials", 1)?;
    test.track(mock);
    let api = api_for(&test, None);
    let storage = MemoryStorage::new();
    let mut state = LoginState {
        form: credentials(),
        error: None,
    };

    let err = LoginService::new(&api, &storage)
        .login(&state.form)
        .await
        .unwrap_err();
    state.fail(&err);

    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
    assert!(storage.is_empty());
    assert!(!Session::get(&storage).logged_in);
    test.assert_mocks();

    Ok(())
}

/// Expect logout after login to clear both the held session and storage
#[tokio::test]
async fn logout_clears_stored_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint("abc", false, 1)
        .build()
        .await?;
    let api = api_for(&test, None);
    let storage = MemoryStorage::new();

    let outcome = LoginService::new(&api, &storage)
        .login(&credentials())
        .await
        .expect("login should succeed");
    let mut state = SessionState::from_storage(&storage);
    assert_eq!(state.session, outcome.session);

    state.logout(&storage).expect("logout should succeed");

    assert_eq!(state.session, Session::default());
    assert!(storage.is_empty());

    Ok(())
}
