use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    components::{ErrorMessage, FeaturedCourseCard, Page},
    controller::{CatalogService, HomeState},
    router::Route,
};

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();
    let mut state = use_signal(HomeState::default);

    // Landing page is public, fetched without the session token
    let _featured = use_resource(move || {
        let api = api.clone();
        async move {
            let result = CatalogService::new(&api).featured().await;
            state.write().apply_fetch(result);
        }
    });

    let current = state.read();
    let courses = current.featured.clone();
    let error = current.error.clone();
    drop(current);

    rsx!(
        Title { "Devla" }
        Meta {
            name: "description",
            content: "Learn to code with Devla, online programming courses from beginner to advanced."
        }
        Page {
            section { class: "text-center py-20",
                h1 { class: "text-5xl font-bold mb-6", "Learn to code with Devla" }
                p { class: "text-xl text-gray-400 mb-8",
                    "Master programming skills with our interactive online courses"
                }
                Link {
                    to: Route::Courses {},
                    class: "btn btn-primary",
                    "Explore courses"
                }
            }
            section { class: "py-10",
                h2 { class: "text-3xl font-bold mb-8 text-center", "Featured courses" }
                ErrorMessage { message: error }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for course in courses {
                        FeaturedCourseCard { key: "{course.id}", course: course.clone() }
                    }
                }
            }
        }
    )
}
