use dioxus::prelude::*;

use crate::api::ApiHandle;
use crate::state::{AirportField, FormAction, FormState};

/// Autocomplete input for one airport field.
///
/// Every keystroke starts a fenced lookup: the form state issues a
/// freshness token and only the completion holding the latest token may
/// update the dropdown, so slow responses for stale queries are discarded.
#[component]
pub fn AirportInput(
    field: AirportField,
    form: Signal<FormState>,
    placeholder: String,
) -> Element {
    let api = use_context::<ApiHandle>();
    let field_state = form.read().airport(field).clone();

    let show_dropdown =
        field_state.loading || (!field_state.options.is_empty() && field_state.selected.is_none());

    rsx! {
        div { class: "airport-field",
            input {
                r#type: "text",
                class: "airport-input",
                placeholder: "{placeholder}",
                value: "{field_state.query}",
                oninput: move |evt: Event<FormData>| {
                    let query = evt.value();
                    let next = form.read().apply(FormAction::QueryChanged(field, query.clone()));
                    form.set(next);

                    // Empty input is never queried.
                    if query.is_empty() {
                        return;
                    }
                    let Some(client) = api.client() else {
                        return;
                    };

                    let (next, token) = form.read().begin_lookup(field);
                    form.set(next);

                    spawn(async move {
                        match client.search_airports(&query).await {
                            Ok(options) => {
                                let next = form.read().finish_lookup(field, token, options);
                                form.set(next);
                            }
                            Err(e) => {
                                // Logged and treated as "no results".
                                tracing::warn!(error = %e, query, "airport lookup failed");
                                let next = form.read().fail_lookup(field, token);
                                form.set(next);
                            }
                        }
                    });
                },
            }

            if show_dropdown {
                div { class: "airport-dropdown",
                    if field_state.loading {
                        p { class: "placeholder", "Searching…" }
                    }
                    for option in field_state.options.iter() {
                        button {
                            class: "airport-option",
                            onclick: {
                                let option = option.clone();
                                move |_| {
                                    let next = form
                                        .read()
                                        .apply(FormAction::SelectAirport(field, option.clone()));
                                    form.set(next);
                                }
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}
