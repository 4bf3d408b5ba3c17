use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{api::ApiClient, config::Config, router::Route, store::SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().unwrap_or_else(|err| {
            tracing::error!("Configuration error: {}", err);
            Config::default()
        })
    });

    use_context_provider(|| ApiClient::new(&config));

    // Read once at startup, login and logout keep it in sync with storage afterwards
    let session = use_store(SessionState::init);
    use_context_provider(|| session);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
