use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::{client::util::embed_url, model::course::Module};

#[component]
pub fn VideoPlayer(video: String) -> Element {
    let src = embed_url(&video);

    rsx!(
        div { class: "bg-base-200 p-4 rounded-lg",
            div { class: "relative", style: "padding-bottom: 56.25%; height: 0;",
                iframe {
                    class: "absolute top-0 left-0 w-full h-full rounded border-0",
                    src: "{src}",
                    title: "Video player",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        }
    )
}

/// Overlay showing one module's video and content
#[component]
pub fn ModulePopup(module: Module, on_close: EventHandler<()>) -> Element {
    rsx!(
        div { class: "fixed inset-0 flex items-center justify-center bg-black/50 z-20",
            div { class: "bg-base-200 p-6 rounded-lg w-full h-full md:w-11/12 md:h-auto",
                div { class: "flex justify-between items-center mb-4",
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 20, height: 20, icon: FaXmark }
                    }
                }
                if let Some(video) = module.video.clone().filter(|video| !video.is_empty()) {
                    VideoPlayer { video }
                }
                h3 { class: "text-2xl font-bold", "{module.title}" }
                p { class: "opacity-50", "{module.content}" }
            }
        }
    )
}
