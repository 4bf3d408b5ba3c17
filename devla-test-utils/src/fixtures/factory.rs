//! Factory functions for backend payloads.
//!
//! Payloads are built as JSON values rather than client types so the fixtures describe
//! the wire format the backend actually sends.

use serde_json::{json, Value};

/// Create a course payload with one module.
///
/// # Arguments
/// - `id` - Course id
/// - `title` - Course title
/// - `difficulty` - One of `Beginner`, `Intermediate` or `Advanced`
pub fn mock_course(id: i64, title: &str, difficulty: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("Description of {}", title),
        "difficulty": difficulty,
        "image": format!("https://cdn.devla.test/courses/{}.png", id),
        "modules": [mock_module(id * 10, "Introduction")],
    })
}

pub fn mock_module(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("About {}", title),
        "content": format!("Content of {}", title),
        "video": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    })
}

/// Create a list of beginner courses with ids `1..=count`
pub fn mock_courses(count: i64) -> Vec<Value> {
    (1..=count)
        .map(|id| mock_course(id, &format!("Course {}", id), "Beginner"))
        .collect()
}

pub fn mock_login(token: &str, is_admin: bool) -> Value {
    json!({ "token": token, "is_admin": is_admin })
}

pub fn mock_message(message: &str) -> Value {
    json!({ "message": message })
}
