use dioxus::prelude::*;

use crate::{client::router::Route, model::course::Course};

/// Image shown for courses without an uploaded image
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

pub fn course_image(course: &Course) -> String {
    match course.image.as_deref() {
        Some(image) if !image.is_empty() => image.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Compact card used for featured courses on the landing page
#[component]
pub fn FeaturedCourseCard(course: Course) -> Element {
    let image = course_image(&course);

    rsx!(
        div { class: "card bg-base-200 shadow-sm overflow-hidden",
            img {
                src: "{image}",
                alt: "{course.title}",
                class: "w-full object-cover",
                width: 300,
                height: 200,
            }
            div { class: "card-body",
                h3 { class: "card-title", "{course.title}" }
                p { class: "text-gray-400", "Difficulty: {course.difficulty}" }
            }
        }
    )
}

/// Course list card linking to the detail page
#[component]
pub fn CourseCard(course: Course) -> Element {
    let image = course_image(&course);

    rsx!(
        div { class: "card bg-base-200 shadow-sm overflow-hidden",
            img {
                src: "{image}",
                alt: "{course.title}",
                class: "w-full",
                width: 300,
                height: 200,
            }
            div { class: "card-body",
                h2 { class: "card-title", "{course.title}" }
                p { class: "text-gray-400", "{course.description}" }
                div { class: "flex justify-between items-center",
                    span { class: "text-blue-500 font-semibold",
                        "Difficulty: {course.difficulty}"
                    }
                    Link {
                        to: Route::CourseDetail { id: course.id },
                        class: "btn btn-primary btn-sm",
                        "Learn more"
                    }
                }
            }
        }
    )
}
