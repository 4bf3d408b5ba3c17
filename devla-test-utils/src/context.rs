//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the
//! mock backend server and the mocks registered on it.

use mockito::{Mock, Server, ServerGuard};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_courses_endpoint(vec![factory::mock_course(1, "Rust basics", "Beginner")], 1)
///     .build()
///     .await?;
///
/// let api = ApiClient::with_base_url(&test.base_url());
/// let courses = api.list_courses().await?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the backend
    pub server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let server = Server::new_async().await;

        Self {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL to point the API client at
    pub fn base_url(&self) -> String {
        self.server.url()
    }

    /// Keeps a mock created after `build()` alive for `assert_mocks`
    pub fn track(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
