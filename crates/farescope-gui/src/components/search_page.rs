use dioxus::prelude::*;

use crate::components::search_form::SearchForm;

/// Landing view: title and the search form.
#[component]
pub fn SearchPage() -> Element {
    rsx! {
        div { class: "page search-page",
            h1 { class: "search-title", "Flights" }
            SearchForm {}
        }
    }
}
