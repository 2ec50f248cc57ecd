#![deny(missing_docs)]

//! # Farescope Models
//!
//! Core data types for the Farescope flight-search client.
//!
//! ## Wire shapes
//!
//! ```text
//! AirportSearchResponse                 GET /flights/searchAirport
//! └── data: [AirportRecord]
//!     ├── presentation.suggestionTitle
//!     └── navigation.{entityType, relevantFlightParams.{skyId, entityId}}
//!
//! FlightSearchResponse                  GET /flights/searchFlights
//! └── data.itineraries: [Itinerary]
//!     ├── legs: [Leg]
//!     └── price.formatted
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`airport`] | Autocomplete wire records and `AirportOption` |
//! | [`criteria`] | `SearchCriteria` and the cabin/trip/sort enums |
//! | [`itinerary`] | Flight-search response types |
//! | [`format`] | Display formatting helpers (duration, stops, times) |
//! | [`locale`] | Locale bootstrap payload |

pub mod airport;
pub mod criteria;
pub mod format;
pub mod itinerary;
pub mod locale;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `farescope_models::AirportOption` directly.
pub use airport::*;
pub use criteria::*;
pub use format::*;
pub use itinerary::*;
pub use locale::*;
