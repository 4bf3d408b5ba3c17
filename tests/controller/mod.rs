//! Tests for the page controllers.
//!
//! These drive the same services the pages call, against a mock backend, and check both
//! the requests made and the page state left behind.

mod catalog;
mod login;

use devla::client::api::ApiClient;
use devla_test_utils::prelude::*;

/// API client for the test's mock backend, holding `token` if given
fn api_for(test: &TestContext, token: Option<&str>) -> ApiClient {
    ApiClient::with_base_url(&test.base_url()).with_token(token.map(str::to_string))
}
