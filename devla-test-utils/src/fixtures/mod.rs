//! Test fixture modules for payloads and HTTP mock creation.
//!
//! - `factory` - course, module and login payloads as the backend sends them
//! - `jwt` - signed session tokens carrying user claims
//! - `mockito` - backend endpoint mocks on the `TestContext` server

pub mod factory;
pub mod jwt;
pub mod mockito;
