//! Tests for the backend API client.
//!
//! Each test points an [`ApiClient`](devla::client::api::ApiClient) at a mockito server
//! and checks the request it sends and how the response is decoded.

mod auth;
mod course;

use devla_test_utils::prelude::*;
