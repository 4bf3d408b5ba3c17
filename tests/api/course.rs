use devla::{
    client::{
        api::{ApiClient, UploadTarget},
        error::Error,
    },
    model::course::{CourseDraft, Difficulty, Module},
};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Expect the course list to decode and the raw token to be sent without a scheme
#[tokio::test]
async fn lists_courses_with_raw_token_header() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/courses")
                .match_header("authorization", "abc")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!(factory::mock_courses(2)).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url()).with_token(Some("abc".to_string()));

    let courses = api.list_courses().await.expect("list should succeed");

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, 1);
    assert_eq!(courses[0].difficulty, Difficulty::Beginner);
    assert_eq!(courses[0].modules.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect no authorization header on the public course list without a session
#[tokio::test]
async fn lists_courses_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/courses")
                .match_header("authorization", Matcher::Missing)
                .with_status(200)
                .with_body("[]")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url());

    let courses = api.list_courses().await.expect("list should succeed");

    assert!(courses.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect a decode error when a success body does not match the course shape
#[tokio::test]
async fn fails_on_malformed_course_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/courses")
                .with_status(200)
                .with_body(r#"{"courses": "nope"}"#)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url());

    let err = api.list_courses().await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));

    Ok(())
}

/// Expect a single course to decode by id
#[tokio::test]
async fn gets_course_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_course_endpoint(7, factory::mock_course(7, "Async Rust", "Advanced"), 1)
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url()).with_token(Some("abc".to_string()));

    let course = api.get_course(7).await.expect("course should load");

    assert_eq!(course.title, "Async Rust");
    assert_eq!(course.difficulty, Difficulty::Advanced);
    test.assert_mocks();

    Ok(())
}

/// Expect a missing course to surface the backend's not-found message
#[tokio::test]
async fn fails_for_unknown_course() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_error_endpoint("GET", "/courses/99", 404, "Course not found", 1)?;
    test.track(mock);
    let api = ApiClient::with_base_url(&test.base_url());

    let err = api.get_course(99).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Course not found");
    test.assert_mocks();

    Ok(())
}

/// Expect the canonical status text when an error response has no body
#[tokio::test]
async fn falls_back_to_status_reason() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/delete_course/3")
                .with_status(403)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url()).with_token(Some("abc".to_string()));

    let err = api.delete_course(3).await.unwrap_err();

    assert_eq!(err.user_message(), "Forbidden");

    Ok(())
}

/// Expect protected calls to fail locally without a token, sending nothing
#[tokio::test]
async fn refuses_protected_call_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("POST", "/add_course").expect(0).create())
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url());

    let err = api.create_course(&CourseDraft::default()).await.unwrap_err();

    assert!(matches!(err, Error::Unauthorized));
    test.assert_mocks();

    Ok(())
}

/// Expect a new module to be posted to the course's module endpoint
#[tokio::test]
async fn adds_module_to_course() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/add_module/4")
                .match_header("authorization", "abc")
                .match_body(Matcher::Json(json!({
                    "title": "Lifetimes",
                    "content": "Borrow checker deep dive",
                    "video": null,
                })))
                .with_status(200)
                .with_body(factory::mock_message("Module added").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url()).with_token(Some("abc".to_string()));
    let module = Module {
        title: "Lifetimes".to_string(),
        content: "Borrow checker deep dive".to_string(),
        ..Default::default()
    };

    let reply = api.add_module(4, &module).await.expect("module should be added");

    assert_eq!(reply.message, "Module added");
    test.assert_mocks();

    Ok(())
}

/// Expect the image to be sent as a multipart file and the hosted URL returned
#[tokio::test]
async fn uploads_image_as_multipart() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/upload_image/new")
                .match_header(
                    "content-type",
                    Matcher::Regex("^multipart/form-data".to_string()),
                )
                .match_body(Matcher::Regex(
                    r#"name="image"; filename="cover.png""#.to_string(),
                ))
                .with_status(200)
                .with_body(r#"{"image_url":"https://cdn.devla.test/cover.png"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = ApiClient::with_base_url(&test.base_url()).with_token(Some("abc".to_string()));

    let url = api
        .upload_image(UploadTarget::New, "cover.png", b"fake-png".to_vec())
        .await
        .expect("upload should succeed");

    assert_eq!(url, "https://cdn.devla.test/cover.png");
    test.assert_mocks();

    Ok(())
}
