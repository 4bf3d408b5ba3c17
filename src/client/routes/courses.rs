use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{CourseCard, ErrorMessage, Page},
        controller::{CatalogService, CoursesState},
        hooks::{use_api, use_guard},
        session::guard::require_session,
        util::parse_difficulty_filter,
    },
    model::course::Difficulty,
};

#[component]
pub fn Courses() -> Element {
    let granted = use_guard(require_session);
    let api = use_api();
    let mut state = use_signal(CoursesState::default);

    let _courses = use_resource(move || {
        let api = api.clone();
        async move {
            if !granted {
                return;
            }

            let result = CatalogService::new(&api).courses().await;
            state.write().apply_fetch(result);
        }
    });

    let current = state.read();
    let visible: Vec<_> = current.visible().into_iter().cloned().collect();
    let query = current.query.clone();
    let error = current.error.clone();
    let difficulty = current.difficulty.map(|level| level.to_string()).unwrap_or_default();
    drop(current);

    rsx!(
        Title { "Courses | Devla" }
        Page {
            h1 { class: "text-4xl font-bold mb-8", "Our courses" }
            div { class: "flex flex-col md:flex-row gap-4 mb-8",
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Search courses...",
                    value: "{query}",
                    oninput: move |evt| state.write().query = evt.value(),
                }
                select {
                    class: "select select-bordered w-full md:w-64",
                    value: difficulty,
                    onchange: move |evt| state.write().difficulty = parse_difficulty_filter(&evt.value()),
                    option { value: "", "All levels" }
                    for level in Difficulty::ALL {
                        option { key: "{level}", value: "{level}", "{level}" }
                    }
                }
            }
            ErrorMessage { message: error }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                for course in visible {
                    CourseCard { key: "{course.id}", course: course.clone() }
                }
            }
        }
    )
}
