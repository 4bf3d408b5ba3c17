pub mod admin;
pub mod course_detail;
pub mod courses;
pub mod home;
pub mod login;
pub mod not_found;

pub use admin::Admin;
pub use course_detail::CourseDetail;
pub use courses::Courses;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
