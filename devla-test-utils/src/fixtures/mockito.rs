//! Backend HTTP mock endpoint creation utilities.

use mockito::Mock;
use serde_json::Value;

use crate::{context::TestContext, fixtures::factory, TestError};

impl TestContext {
    /// Create a mock `GET /courses` endpoint.
    ///
    /// # Arguments
    /// - `courses` - Course payloads returned in the body
    /// - `expected_requests` - Number of times the endpoint is expected to be hit
    pub fn create_courses_endpoint(
        &mut self,
        courses: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&courses)?;

        Ok(self
            .server
            .mock("GET", "/courses")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `GET /courses/{id}` endpoint.
    pub fn create_course_endpoint(
        &mut self,
        course_id: i64,
        course: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&course)?;

        Ok(self
            .server
            .mock("GET", format!("/courses/{}", course_id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /login` endpoint accepting any credentials.
    pub fn create_login_endpoint(
        &mut self,
        token: &str,
        is_admin: bool,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&factory::mock_login(token, is_admin))?;

        Ok(self
            .server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock endpoint answering with an error status and `{"message": ...}` body.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&factory::mock_message(message))?;

        Ok(self
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }
}
