use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{
        admin::{ManagedCourse, NewCourseForm},
        ErrorMessage, Page,
    },
    controller::{AdminService, AdminState},
    hooks::{use_api, use_guard},
    session::guard::require_admin,
};

#[component]
pub fn Admin() -> Element {
    let granted = use_guard(require_admin);
    let api = use_api();
    let mut state = use_signal(AdminState::default);

    let _courses = use_resource(move || {
        let api = api.clone();
        async move {
            if !granted {
                return;
            }

            let result = AdminService::new(&api).fetch().await;
            state.write().apply_fetch(result);
        }
    });

    let current = state.read();
    let visible: Vec<_> = current.visible_courses().into_iter().cloned().collect();
    let search = current.search.clone();
    let error = current.error.clone();
    drop(current);

    rsx!(
        Title { "Admin | Devla" }
        Page {
            h1 { class: "text-4xl font-bold mb-8", "Admin panel" }
            ErrorMessage { message: error }
            NewCourseForm { state }
            div {
                h2 { class: "text-2xl font-bold mb-4", "Manage courses" }
                input {
                    class: "input input-bordered w-full mb-4",
                    r#type: "text",
                    placeholder: "Search courses...",
                    value: "{search}",
                    oninput: move |evt| state.write().search = evt.value(),
                }
                for course in visible {
                    ManagedCourse { key: "{course.id}", course: course.clone(), state }
                }
            }
        }
    )
}
