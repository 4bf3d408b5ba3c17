use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBook, FaHouse, FaRightFromBracket, FaRightToBracket,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::DevlaTitleButton, hooks::use_session, router::Route,
    session::storage::platform_storage,
};

/// Layout shell wrapping every page
#[component]
pub fn Navbar() -> Element {
    let mut session_store = use_session();
    let nav = navigator();

    let session = session_store.read().session.clone();

    let logout = move |_| {
        if let Err(err) = session_store.write().logout(&platform_storage()) {
            tracing::error!("Failed to clear session: {}", err);
        }

        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "flex flex-col min-h-screen",
            div {
                class: "navbar bg-base-200 fixed z-10",
                div {
                    class: "navbar-start",
                    DevlaTitleButton {}
                }
                div {
                    class: "navbar-end",
                    ul { class: "flex items-center gap-4",
                        li {
                            Link { to: Route::Home {}, class: "flex items-center gap-1",
                                Icon { width: 18, height: 18, icon: FaHouse }
                                "Home"
                            }
                        }
                        li {
                            Link { to: Route::Courses {}, class: "flex items-center gap-1",
                                Icon { width: 18, height: 18, icon: FaBook }
                                "Courses"
                            }
                        }
                        if session.logged_in {
                            if session.is_admin {
                                li {
                                    Link { to: Route::Admin {}, "Admin Dashboard" }
                                }
                            }
                            li {
                                button {
                                    class: "btn btn-outline flex items-center gap-1",
                                    onclick: logout,
                                    Icon { width: 18, height: 18, icon: FaRightFromBracket }
                                    "Logout"
                                }
                            }
                        } else {
                            li {
                                Link { to: Route::Login {}, class: "flex items-center gap-1",
                                    Icon { width: 18, height: 18, icon: FaRightToBracket }
                                    "Login"
                                }
                            }
                        }
                    }
                }
            }
            main { class: "flex-grow",
                Outlet::<Route> {}
            }
            footer { class: "bg-base-200 p-4 text-center",
                p { "© 2023 Devla. All rights reserved." }
            }
        }
    }
}
