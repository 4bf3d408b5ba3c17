//! Page controllers.
//!
//! Each page keeps its view state in a plain struct and talks to the backend through a
//! small service borrowing the [`ApiClient`](crate::client::api::ApiClient). The Dioxus
//! routes hold the state in a signal and call the services from spawned tasks, so the
//! controllers can be exercised without a renderer.

pub mod admin;
pub mod catalog;
pub mod login;

pub use admin::{AdminService, AdminState, ModuleField, WriteOutcome};
pub use catalog::{CatalogService, CourseDetailState, CoursesState, HomeState};
pub use login::{LoginOutcome, LoginService, LoginState};
