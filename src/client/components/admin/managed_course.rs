use dioxus::prelude::*;

use crate::{
    client::{
        components::admin::CourseEditor,
        controller::{AdminService, AdminState},
        hooks::use_api,
    },
    model::course::Course,
};

/// Admin list entry, switches to the editor while the course is being edited
#[component]
pub fn ManagedCourse(course: Course, state: Signal<AdminState>) -> Element {
    let mut state = state;
    let api = use_api();

    let id = course.id;
    let editing = state.read().is_editing(id);
    let module_count = course.modules.len();

    let delete = move |_| {
        let api = api.clone();
        spawn(async move {
            let outcome = AdminService::new(&api).delete(id).await;
            state.write().apply_delete(id, outcome);
        });
    };

    rsx!(
        div { class: "bg-base-200 p-4 rounded-lg mb-4",
            if editing {
                CourseEditor { state }
            } else {
                h3 { class: "text-xl font-bold", "{course.title}" }
                p { "{course.description}" }
                p { "Difficulty: {course.difficulty}" }
                p { "Modules: {module_count}" }
                div { class: "flex gap-2 mt-2",
                    button {
                        class: "btn btn-warning btn-sm",
                        onclick: move |_| {
                            state.write().begin_edit(id);
                        },
                        "Edit"
                    }
                    button { class: "btn btn-error btn-sm", onclick: delete, "Delete" }
                }
            }
        }
    )
}
