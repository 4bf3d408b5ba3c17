use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    controller::{AdminService, AdminState},
    hooks::use_api,
};

/// File picker uploading the chosen image for the course being edited, or the new course
#[component]
pub fn ImageUpload(state: Signal<AdminState>) -> Element {
    let mut state = state;
    let api = use_api();

    let upload = move |evt: FormEvent| {
        let api = api.clone();
        let files = evt.files();
        let target = state.read().upload_target();

        spawn(async move {
            let Some(file) = files.into_iter().next() else {
                return;
            };

            let file_name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(err) => {
                    tracing::error!("Failed to read image {}: {}", file_name, err);
                    return;
                }
            };

            match AdminService::new(&api)
                .upload_image(target, &file_name, bytes)
                .await
            {
                Ok(image_url) => state.write().apply_image(target, image_url),
                Err(err) => state.write().fail(&err),
            }
        });
    };

    rsx!(
        input {
            class: "file-input file-input-bordered w-full",
            r#type: "file",
            accept: "image/*",
            onchange: upload,
        }
    )
}
