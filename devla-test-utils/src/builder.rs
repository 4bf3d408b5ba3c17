//! Declarative test builder.
//!
//! The builder queues mock backend endpoints and creates them all during the final
//! `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to start the mock
/// backend with every queued endpoint registered.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    courses_endpoints: Vec<(Vec<Value>, usize)>, // (courses, expected_requests)
    course_endpoints: Vec<(i64, Value, usize)>,
    login_endpoints: Vec<(String, bool, usize)>, // (token, is_admin, expected_requests)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            courses_endpoints: Vec::new(),
            course_endpoints: Vec::new(),
            login_endpoints: Vec::new(),
        }
    }

    /// Add a `GET /courses` endpoint returning `courses`.
    ///
    /// # Arguments
    /// - `courses` - Course payloads, see [`factory::mock_course`](crate::fixtures::factory::mock_course)
    /// - `expected_requests` - Number of times the endpoint must be hit
    pub fn with_courses_endpoint(mut self, courses: Vec<Value>, expected_requests: usize) -> Self {
        self.courses_endpoints.push((courses, expected_requests));
        self
    }

    pub fn with_course_endpoint(
        mut self,
        course_id: i64,
        course: Value,
        expected_requests: usize,
    ) -> Self {
        self.course_endpoints
            .push((course_id, course, expected_requests));
        self
    }

    /// Add a `POST /login` endpoint handing out `token`.
    pub fn with_login_endpoint(
        mut self,
        token: impl Into<String>,
        is_admin: bool,
        expected_requests: usize,
    ) -> Self {
        self.login_endpoints
            .push((token.into(), is_admin, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// For request matching the shortcuts don't cover, such as body matchers or error
    /// statuses.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock backend and create every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the server and its mocks
    /// - `Err(TestError::Json)` - A queued payload failed to serialize
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await;

        // Custom endpoints are created first so tests can queue a specific mock ahead of
        // a shortcut on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (courses, expected) in self.courses_endpoints {
            mocks.push(setup.create_courses_endpoint(courses, expected)?);
        }

        for (course_id, course, expected) in self.course_endpoints {
            mocks.push(setup.create_course_endpoint(course_id, course, expected)?);
        }

        for (token, is_admin, expected) in self.login_endpoints {
            mocks.push(setup.create_login_endpoint(&token, is_admin, expected)?);
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
