pub mod featured;
pub mod filter;
pub mod video;

pub use featured::featured_courses;
pub use filter::{filter_courses, parse_difficulty_filter};
pub use video::embed_url;
