use dioxus::prelude::*;

/// Booking placeholder. No booking transaction is performed.
#[component]
pub fn BookingPage() -> Element {
    rsx! {
        div { class: "page booking-page",
            h2 { "Booking" }
            p { class: "placeholder", "Booking is not available yet." }
        }
    }
}
