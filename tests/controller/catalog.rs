use devla::client::controller::{CatalogService, CourseDetailState, CoursesState, HomeState};
use devla::model::course::Difficulty;
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Expect the featured section to pick ids 1 to 4 in list order without sending a token
#[tokio::test]
async fn featured_selects_fixed_ids_anonymously() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/courses")
                .match_header("authorization", Matcher::Missing)
                .with_status(200)
                .with_body(json!(factory::mock_courses(5)).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = api_for(&test, Some("abc"));

    let featured = CatalogService::new(&api)
        .featured()
        .await
        .expect("featured courses should load");

    let ids: Vec<i64> = featured.iter().map(|course| course.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    test.assert_mocks();

    Ok(())
}

/// Expect a failed featured fetch to surface in the landing page's error slot
#[tokio::test]
async fn featured_shows_fetch_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_error_endpoint("GET", "/courses", 500, "Database unavailable", 1)?;
    test.track(mock);
    let api = api_for(&test, None);
    let mut state = HomeState::default();

    state.apply_fetch(CatalogService::new(&api).featured().await);

    assert!(state.featured.is_empty());
    assert_eq!(state.error.as_deref(), Some("Database unavailable"));
    test.assert_mocks();

    Ok(())
}

/// Expect the course list page to filter the fetched list by search and difficulty
#[tokio::test]
async fn course_list_filters_fetched_courses() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_courses_endpoint(
            vec![
                factory::mock_course(1, "Rust basics", "Beginner"),
                factory::mock_course(2, "Advanced Rust", "Advanced"),
                factory::mock_course(3, "Go basics", "Beginner"),
            ],
            1,
        )
        .build()
        .await?;
    let api = api_for(&test, Some("abc"));
    let mut state = CoursesState {
        query: "rust".to_string(),
        ..Default::default()
    };

    state.apply_fetch(CatalogService::new(&api).courses().await);

    let titles: Vec<&str> = state.visible().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Rust basics", "Advanced Rust"]);

    state.difficulty = Some(Difficulty::Advanced);
    let titles: Vec<&str> = state.visible().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Advanced Rust"]);
    assert!(state.error.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect a failed list fetch to show an error and keep the page empty
#[tokio::test]
async fn course_list_shows_fetch_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.create_error_endpoint("GET", "/courses", 500, "Database unavailable", 1)?;
    test.track(mock);
    let api = api_for(&test, Some("abc"));
    let mut state = CoursesState::default();

    state.apply_fetch(CatalogService::new(&api).courses().await);

    assert!(state.courses.is_empty());
    assert_eq!(state.error.as_deref(), Some("Database unavailable"));
    test.assert_mocks();

    Ok(())
}

/// Expect the detail page to load a course and open its modules by index
#[tokio::test]
async fn course_detail_opens_modules() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_course_endpoint(2, factory::mock_course(2, "Async Rust", "Intermediate"), 1)
        .build()
        .await?;
    let api = api_for(&test, Some("abc"));
    let mut state = CourseDetailState::default();

    state.apply_fetch(CatalogService::new(&api).course(2).await);
    state.open_module(0);

    let module = state.active_module().expect("module should be open");
    assert_eq!(module.title, "Introduction");
    assert_eq!(module.preview(), "About Intr...");

    state.open_module(5);
    assert_eq!(state.active_module.unwrap(), 0);
    test.assert_mocks();

    Ok(())
}
