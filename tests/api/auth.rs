use devla::{
    client::{
        api::ApiClient,
        error::{Error, NETWORK_FAILURE_MESSAGE},
    },
    model::api::LoginRequest,
};
use devla_test_utils::constant::{TEST_EMAIL, TEST_PASSWORD};
use mockito::Matcher;
use serde_json::json;

use super::*;

fn credentials() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Expect the token and admin flag from a successful login, with the credentials sent as JSON
#[tokio::test]
async fn returns_token_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/login")
                .match_body(Matcher::Json(json!({
                    "email": TEST_EMAIL,
                    "password": TEST_PASSWORD,
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(factory::mock_login("abc", true).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url());

    let login = api.login(&credentials()).await.expect("login should succeed");

    assert_eq!(login.token, "abc");
    assert!(login.is_admin);
    test.assert_mocks();

    Ok(())
}

/// Expect the admin flag to default to false when the backend omits it
#[tokio::test]
async fn defaults_missing_admin_flag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/login")
                .with_status(200)
                .with_body(r#"{"token":"abc"}"#)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url());

    let login = api.login(&credentials()).await.expect("login should succeed");

    assert!(!login.is_admin);

    Ok(())
}

/// Expect the backend's rejection message verbatim for invalid credentials
#[tokio::test]
async fn returns_backend_message_on_rejection() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_error_endpoint("POST", "/login", 401, "invalid credentials", 1)?;
    test.track(mock);
    let api = ApiClient::with_base_url(&test.base_url());

    let err = api.login(&credentials()).await.unwrap_err();

    assert!(matches!(err, Error::Rejected { status: 401, .. }));
    assert_eq!(err.user_message(), "invalid credentials");
    test.assert_mocks();

    Ok(())
}

/// Expect the generic network message when the backend cannot be reached
#[tokio::test]
async fn fails_when_backend_unreachable() {
    let api = ApiClient::with_base_url("http://127.0.0.1:1");

    let err = api.login(&credentials()).await.unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
}
