pub mod api;
pub mod course;
