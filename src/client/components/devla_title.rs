use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCode;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn DevlaTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2 text-pink-500",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaCode
                }
                p { class: "text-2xl font-bold",
                    "Devla"
                }
            }
        }
    )
}
