use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    components::{ErrorMessage, Page},
    controller::{LoginService, LoginState},
    hooks::use_session,
    session::storage::platform_storage,
};

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let mut session = use_session();
    let nav = navigator();
    let mut state = use_signal(LoginState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        spawn(async move {
            let credentials = state.read().form.clone();
            let storage = platform_storage();

            match LoginService::new(&api, &storage).login(&credentials).await {
                Ok(outcome) => {
                    session.write().login(outcome.session);
                    nav.push(outcome.redirect);
                }
                Err(err) => state.write().fail(&err),
            }
        });
    };

    let current = state.read();
    let email = current.form.email.clone();
    let password = current.form.password.clone();
    let error = current.error.clone();
    drop(current);

    rsx!(
        Title { "Login | Devla" }
        Page { class: "flex justify-center",
            div { class: "card bg-base-200 w-full max-w-md shadow-sm",
                div { class: "card-body",
                    h1 { class: "card-title text-2xl", "Login to Devla" }
                    form { class: "flex flex-col gap-4", onsubmit: submit,
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            placeholder: "Email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| state.write().form.email = evt.value(),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| state.write().form.password = evt.value(),
                        }
                        ErrorMessage { message: error }
                        button { class: "btn btn-primary w-full", r#type: "submit", "Login" }
                    }
                }
            }
        }
    )
}
