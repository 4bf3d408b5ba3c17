use dioxus::prelude::*;

use crate::{
    client::{
        components::admin::ImageUpload,
        controller::{AdminService, AdminState},
        hooks::use_api,
    },
    model::course::{Difficulty, Module},
};

/// Create-course form with its module sub-form and image upload
#[component]
pub fn NewCourseForm(state: Signal<AdminState>) -> Element {
    let mut state = state;
    let api = use_api();

    let draft = state.read().new_course.clone();
    let module = state.read().new_module.clone();

    let create_api = api.clone();
    let create = move |_| {
        let api = create_api.clone();
        spawn(async move {
            let draft = state.read().new_course.clone();

            let outcome = AdminService::new(&api).create(&draft).await;
            state.write().apply_create(outcome);
        });
    };

    // With a course open for editing the module goes straight to the backend, otherwise
    // it is kept on the create form and sent with the new course.
    let add_module = move |_| {
        let api = api.clone();
        spawn(async move {
            let editing_id = state.read().editing.as_ref().map(|course| course.id);

            let Some(course_id) = editing_id else {
                state.write().stage_module();
                return;
            };

            let module = Module::from(state.read().new_module.clone());
            match AdminService::new(&api).add_module(course_id, &module).await {
                Ok(()) => {
                    let mut state = state.write();
                    state.new_module = Default::default();
                    state.apply_added_module(course_id, module);
                }
                Err(err) => state.write().fail(&err),
            }
        });
    };

    rsx!(
        div { class: "mb-8 flex flex-col gap-2",
            h2 { class: "text-2xl font-bold", "Add new course" }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                placeholder: "Title",
                required: true,
                value: "{draft.title}",
                oninput: move |evt| state.write().new_course.title = evt.value(),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                placeholder: "Description",
                required: true,
                value: "{draft.description}",
                oninput: move |evt| state.write().new_course.description = evt.value(),
            }
            select {
                class: "select select-bordered w-full",
                value: "{draft.difficulty}",
                onchange: move |evt| {
                    if let Ok(level) = evt.value().parse::<Difficulty>() {
                        state.write().new_course.difficulty = level;
                    }
                },
                for level in Difficulty::ALL {
                    option { key: "{level}", value: "{level}", "{level}" }
                }
            }

            h3 { class: "text-xl font-bold", "Upload image" }
            ImageUpload { state }
            if let Some(image) = draft.image.clone() {
                p { class: "text-sm opacity-70", "Image: {image}" }
            }

            h3 { class: "text-xl font-bold", "Add modules" }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                placeholder: "Module title",
                value: "{module.title}",
                oninput: move |evt| state.write().new_module.title = evt.value(),
            }
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Module content",
                value: "{module.content}",
                oninput: move |evt| state.write().new_module.content = evt.value(),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                placeholder: "Video URL",
                value: "{module.video}",
                oninput: move |evt| state.write().new_module.video = evt.value(),
            }
            button {
                class: "btn btn-info btn-sm w-fit",
                onclick: add_module,
                "Add module"
            }

            for (index, staged) in draft.modules.iter().enumerate() {
                div { key: "{index}", class: "bg-base-300 p-2 rounded",
                    h4 { class: "font-bold", "{staged.title}" }
                    p { "{staged.content}" }
                    p { "Video: " {staged.video.clone().unwrap_or_default()} }
                }
            }

            button {
                class: "btn btn-primary w-fit",
                onclick: create,
                "Add course"
            }
        }
    )
}
