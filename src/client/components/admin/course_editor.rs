use dioxus::prelude::*;

use crate::{
    client::{
        components::admin::ImageUpload,
        controller::{AdminService, AdminState, ModuleField},
        hooks::use_api,
    },
    model::course::Difficulty,
};

/// In-place editor for the course currently held in `AdminState::editing`
#[component]
pub fn CourseEditor(state: Signal<AdminState>) -> Element {
    let mut state = state;
    let api = use_api();

    let Some(draft) = state.read().editing.clone() else {
        return rsx! {};
    };

    let save = move |_| {
        let api = api.clone();
        spawn(async move {
            let Some(draft) = state.read().editing.clone() else {
                return;
            };

            let outcome = AdminService::new(&api).save(&draft).await;
            state.write().apply_save(outcome);
        });
    };

    rsx!(
        div { class: "flex flex-col gap-2",
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                value: "{draft.title}",
                oninput: move |evt| state.write().edit_title(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                value: "{draft.description}",
                oninput: move |evt| state.write().edit_description(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                value: "{draft.difficulty}",
                onchange: move |evt| {
                    if let Ok(level) = evt.value().parse::<Difficulty>() {
                        state.write().edit_difficulty(level);
                    }
                },
                for level in Difficulty::ALL {
                    option { key: "{level}", value: "{level}", "{level}" }
                }
            }
            ImageUpload { state }

            h3 { class: "text-xl font-bold", "Edit modules" }
            for (index, module) in draft.modules.iter().enumerate() {
                div { key: "{index}", class: "bg-base-300 p-2 rounded flex flex-col gap-2",
                    input {
                        class: "input input-bordered input-sm w-full",
                        r#type: "text",
                        value: "{module.title}",
                        oninput: move |evt| state.write().edit_module(index, ModuleField::Title, evt.value()),
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        value: "{module.content}",
                        oninput: move |evt| state.write().edit_module(index, ModuleField::Content, evt.value()),
                    }
                    input {
                        class: "input input-bordered input-sm w-full",
                        r#type: "text",
                        placeholder: "Video URL",
                        value: module.video.clone().unwrap_or_default(),
                        oninput: move |evt| state.write().edit_module(index, ModuleField::Video, evt.value()),
                    }
                    button {
                        class: "btn btn-error btn-sm w-fit",
                        onclick: move |_| state.write().remove_module(index),
                        "Remove module"
                    }
                }
            }

            div { class: "flex gap-2",
                button { class: "btn btn-success btn-sm", onclick: save, "Save" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| state.write().cancel_edit(),
                    "Cancel"
                }
            }
        }
    )
}
