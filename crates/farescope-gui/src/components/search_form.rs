use chrono::NaiveDate;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use farescope_models::{CabinClass, TripType};

use crate::api::ApiHandle;
use crate::components::airport_field::AirportInput;
use crate::state::{AirportField, FormAction, FormState, SearchSession};

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// The search form: trip options, two airport autocompletes, dates and
/// the submit button. All state lives in one [`FormState`] signal updated
/// through reducer transitions.
#[component]
pub fn SearchForm() -> Element {
    let mut form = use_signal(FormState::default);
    let api = use_context::<ApiHandle>();
    let mut session = use_context::<Signal<SearchSession>>();
    let navigator = use_navigator();

    let state = form.read().clone();
    let missing_banner = if state.missing.is_empty() {
        None
    } else {
        let fields: Vec<&str> = state.missing.iter().map(|f| f.label()).collect();
        Some(format!("Missing: {}", fields.join(", ")))
    };

    rsx! {
        div { class: "search-form",
            // Trip options row
            div { class: "form-options",
                select {
                    class: "form-select",
                    value: "{state.trip_type}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(t) = evt.value().parse::<TripType>() {
                            let next = form.read().apply(FormAction::SetTripType(t));
                            form.set(next);
                        }
                    },
                    for t in TripType::iter() {
                        option { value: "{t}", selected: t == state.trip_type, "{t.label()}" }
                    }
                }
                select {
                    class: "form-select",
                    value: "{state.passengers}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(n) = evt.value().parse::<u8>() {
                            let next = form.read().apply(FormAction::SetPassengers(n));
                            form.set(next);
                        }
                    },
                    for n in 1..=9u8 {
                        option { value: "{n}", selected: n == state.passengers, "{n}" }
                    }
                }
                select {
                    class: "form-select",
                    value: "{state.cabin_class}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(c) = evt.value().parse::<CabinClass>() {
                            let next = form.read().apply(FormAction::SetCabinClass(c));
                            form.set(next);
                        }
                    },
                    for c in CabinClass::iter() {
                        option { value: "{c}", selected: c == state.cabin_class, "{c.label()}" }
                    }
                }
            }

            // Airports and dates row
            div { class: "form-fields",
                AirportInput {
                    field: AirportField::Origin,
                    form,
                    placeholder: "Where from?",
                }
                AirportInput {
                    field: AirportField::Destination,
                    form,
                    placeholder: "Where to?",
                }
                input {
                    r#type: "date",
                    class: "date-input",
                    value: state.departure_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                    oninput: move |evt: Event<FormData>| {
                        let next = form
                            .read()
                            .apply(FormAction::SetDepartureDate(parse_date(&evt.value())));
                        form.set(next);
                    },
                }
                if state.trip_type.has_return() {
                    input {
                        r#type: "date",
                        class: "date-input",
                        value: state.return_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                        oninput: move |evt: Event<FormData>| {
                            let next = form
                                .read()
                                .apply(FormAction::SetReturnDate(parse_date(&evt.value())));
                            form.set(next);
                        },
                    }
                }
            }

            if let Some(banner) = missing_banner {
                div { class: "error-banner", "{banner}" }
            }

            button {
                class: "explore-btn",
                disabled: state.searching,
                onclick: move |_| {
                    let current = form.read().clone();
                    if current.searching {
                        return;
                    }
                    match current.validate() {
                        Err(missing) => {
                            form.set(current.apply(FormAction::ValidationFailed(missing)));
                        }
                        Ok(criteria) => {
                            let Some(client) = api.client() else {
                                tracing::warn!("API client unavailable, search skipped");
                                return;
                            };
                            form.set(current.apply(FormAction::SearchStarted));
                            spawn(async move {
                                match client.search_flights(&criteria).await {
                                    Ok(flights) => {
                                        session.write().flights = Some(flights);
                                        let next = form.read().apply(FormAction::SearchFinished);
                                        form.set(next);
                                        navigator.push(crate::Route::SearchResultsPage {});
                                    }
                                    Err(e) => {
                                        // The user stays on the form; no retry.
                                        tracing::warn!(error = %e, "flight search failed");
                                        let next = form.read().apply(FormAction::SearchFinished);
                                        form.set(next);
                                    }
                                }
                            });
                        }
                    }
                },
                if state.searching { "Searching…" } else { "Explore" }
            }
        }
    }
}
