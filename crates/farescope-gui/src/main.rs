mod api;
mod components;
mod state;

use dioxus::prelude::*;

use components::booking_page::BookingPage;
use components::results_page::SearchResultsPage;
use components::search_page::SearchPage;
use farescope_models::Locale;
use state::SearchSession;

#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[route("/")]
    SearchPage {},
    #[route("/search")]
    SearchResultsPage {},
    #[route("/booking")]
    BookingPage {},
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api = use_context_provider(api::ApiHandle::from_env);
    let config_error = api.error();
    // In-memory navigation state: the results view reads the response the
    // form stored here. Nothing survives a restart.
    use_context_provider(|| Signal::new(SearchSession::default()));
    let mut locale = use_context_provider(|| Signal::new(Locale::default()));

    // Resolve market/currency once at startup; mocked in debug builds.
    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            let Some(client) = api.client() else { return };
            match client.locale().await {
                Ok(response) => {
                    tracing::debug!(market = %response.data.market, "locale resolved");
                    locale.set(response.data);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "locale lookup failed, keeping default");
                }
            }
        });
    });

    rsx! {
        style { {include_str!("style.css")} }
        div { class: "app-root",
            if let Some(err) = config_error {
                div { class: "error-banner", "{err}" }
            }
            Router::<Route> {}
        }
    }
}
