use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "container mx-auto pt-[64px] px-4 py-20 {class}",
            {children}
        }
    )
}

/// Inline error slot, renders nothing without a message
#[component]
pub fn ErrorMessage(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            p { class: "text-red-500 text-center",
                "{message}"
            }
        }
    )
}
