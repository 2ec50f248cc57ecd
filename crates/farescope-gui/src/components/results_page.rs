use dioxus::prelude::*;

use farescope_models::{format_duration, format_leg_time, format_stops, Itinerary};

use crate::state::SearchSession;

/// Results view: one card per itinerary from the session's last search.
///
/// Opened without a search (no session payload), it shows an empty list.
#[component]
pub fn SearchResultsPage() -> Element {
    let session = use_context::<Signal<SearchSession>>();
    let itineraries: Vec<Itinerary> = session
        .read()
        .flights
        .as_ref()
        .map(|f| f.data.itineraries.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "page results-page",
            h2 { class: "results-title", "Departing Flights" }
            div { class: "results-box",
                if itineraries.is_empty() {
                    p { class: "placeholder", "No flights to show. Run a search first." }
                }
                for (idx, itinerary) in itineraries.iter().enumerate() {
                    FlightCard { key: "{idx}", itinerary: itinerary.clone() }
                }
            }
        }
    }
}

/// One itinerary card. Only the first leg is displayed; multi-leg
/// itineraries are not fully represented.
#[component]
fn FlightCard(itinerary: Itinerary) -> Element {
    let Some(leg) = itinerary.first_leg() else {
        return rsx! {};
    };
    let carrier = leg.carriers.marketing.first();

    let departure = format_leg_time(&leg.departure);
    let arrival = format_leg_time(&leg.arrival);
    let duration = format_duration(leg.duration_in_minutes);
    let stops = format_stops(leg.stop_count);

    rsx! {
        div { class: "flight-card",
            div { class: "card-carrier",
                if let Some(carrier) = carrier {
                    img { class: "carrier-logo", src: "{carrier.logo_url}", alt: "carrier logo" }
                }
            }
            div { class: "card-times",
                p { "{departure} – {arrival}" }
                if let Some(carrier) = carrier {
                    p { class: "card-subtext", "{carrier.name}" }
                }
            }
            div { class: "card-duration",
                p { "{duration}" }
                p { class: "card-subtext",
                    "{leg.origin.display_code} – {leg.destination.display_code}"
                }
            }
            div { class: "card-stops",
                p { "{stops}" }
            }
            div { class: "card-price",
                p { "{itinerary.price.formatted}" }
                Link { class: "book-link", to: crate::Route::BookingPage {}, "Book" }
            }
        }
    }
}
