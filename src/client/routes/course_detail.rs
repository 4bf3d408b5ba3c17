use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{course_card::course_image, ErrorMessage, ModulePopup, Page},
    controller::{CatalogService, CourseDetailState},
    hooks::{use_api, use_guard},
    session::guard::require_session,
};

#[component]
pub fn CourseDetail(id: i64) -> Element {
    let granted = use_guard(require_session);
    let api = use_api();
    let mut state = use_signal(CourseDetailState::default);

    // Re-runs when navigating between two detail pages
    let _course = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move {
            if !granted {
                return;
            }

            let result = CatalogService::new(&api).course(id).await;
            state.write().apply_fetch(result);
        }
    }));

    let current = state.read();
    let course = current.course.clone();
    let active = current.active_module().cloned();
    let error = current.error.clone();
    drop(current);

    let Some(course) = course else {
        return rsx!(
            Page {
                if error.is_some() {
                    ErrorMessage { message: error }
                } else {
                    div { class: "text-center", "Loading..." }
                }
            }
        );
    };

    let image = course_image(&course);

    rsx!(
        Title { "{course.title} | Devla" }
        Page {
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                div { class: "md:col-span-2",
                    img {
                        src: "{image}",
                        alt: "{course.title}",
                        class: "w-full rounded-lg mb-6",
                    }
                    h1 { class: "text-4xl font-bold mb-4", "{course.title}" }
                    p { class: "text-gray-400 mb-6", "{course.description}" }
                    span { class: "text-blue-500 font-semibold", "Difficulty: {course.difficulty}" }
                }
                div {
                    h2 { class: "text-2xl font-bold mb-4", "Course modules" }
                    ul { class: "flex flex-col gap-2",
                        for (index, module) in course.modules.iter().enumerate() {
                            li { key: "{index}",
                                button {
                                    class: "btn btn-ghost w-full justify-start h-auto py-2 text-left",
                                    onclick: move |_| state.write().open_module(index),
                                    div {
                                        h3 { class: "font-semibold", "{module.title}" }
                                        p { class: "text-sm opacity-60", {module.preview()} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            ErrorMessage { message: error }
            if let Some(module) = active {
                ModulePopup {
                    module,
                    on_close: move |_| state.write().close_module(),
                }
            }
        }
    )
}
