pub mod admin;
pub mod course_card;
pub mod devla_title;
pub mod module_popup;
pub mod navbar;
pub mod page;

pub use course_card::{CourseCard, FeaturedCourseCard};
pub use devla_title::DevlaTitleButton;
pub use module_popup::{ModulePopup, VideoPlayer};
pub use navbar::Navbar;
pub use page::{ErrorMessage, Page};
