mod course_editor;
mod course_form;
mod image_upload;
mod managed_course;

pub use course_editor::CourseEditor;
pub use course_form::NewCourseForm;
pub use image_upload::ImageUpload;
pub use managed_course::ManagedCourse;
