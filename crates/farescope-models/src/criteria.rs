//! Flight-search criteria.
//!
//! A [`SearchCriteria`] is assembled from form state at submit time and
//! serialized into the query string of the flight-search endpoint. Fields
//! may be absent; building query parameters from an incomplete criteria is
//! infallible (absent values serialize as empty strings and the external
//! API governs the outcome).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Form-level enums
// ---------------------------------------------------------------------------

/// Cabin class requested for the search.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum CabinClass {
    /// Economy cabin.
    Economy,
    /// Premium economy cabin.
    PremiumEconomy,
    /// Business cabin.
    Business,
    /// First-class cabin.
    First,
}

impl CabinClass {
    /// Human-readable label for form controls.
    pub fn label(self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

/// Trip type selected on the form. Never sent on the wire; it only decides
/// whether a return date is collected.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum TripType {
    /// Outbound and return flight.
    RoundTrip,
    /// Outbound flight only.
    OneWay,
    /// Multiple segments. The form currently collects a single
    /// origin/destination pair regardless, so this behaves as round trip.
    MultiCity,
}

impl TripType {
    /// Human-readable label for form controls.
    pub fn label(self) -> &'static str {
        match self {
            TripType::RoundTrip => "Round trip",
            TripType::OneWay => "One way",
            TripType::MultiCity => "Multi-city",
        }
    }

    /// Whether this trip type collects a return date.
    pub fn has_return(self) -> bool {
        !matches!(self, TripType::OneWay)
    }
}

/// Result ordering requested from the search endpoint.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// The API's blended "best" ordering.
    Best,
}

// ---------------------------------------------------------------------------
// SearchCriteria
// ---------------------------------------------------------------------------

/// Parameters of one flight search.
///
/// Built from form state at submit time; not persisted. Identifier and date
/// fields are optional so that an incomplete form can still be serialized
/// without panicking (the external API rejects it asynchronously).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Origin airport identifier.
    pub origin_sky_id: Option<String>,
    /// Destination airport identifier.
    pub destination_sky_id: Option<String>,
    /// Origin location entity identifier.
    pub origin_entity_id: Option<String>,
    /// Destination location entity identifier.
    pub destination_entity_id: Option<String>,
    /// Outbound date.
    pub departure_date: Option<NaiveDate>,
    /// Return date; absent for one-way trips.
    pub return_date: Option<NaiveDate>,
    /// Requested cabin class.
    pub cabin_class: CabinClass,
    /// Number of adult passengers (1–9 on the form).
    pub passengers: u8,
    /// Requested result ordering.
    pub sort_order: SortOrder,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            origin_sky_id: None,
            destination_sky_id: None,
            origin_entity_id: None,
            destination_entity_id: None,
            departure_date: None,
            return_date: None,
            cabin_class: CabinClass::Economy,
            passengers: 1,
            sort_order: SortOrder::Best,
        }
    }
}

impl SearchCriteria {
    /// Serialize into the query parameters of `GET /flights/searchFlights`.
    ///
    /// Key order matches the endpoint's documented parameter list. Absent
    /// fields serialize as empty strings; `returnDate` is always present
    /// and empty for one-way trips.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let date = |d: &Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
        };
        vec![
            ("originSkyId", self.origin_sky_id.clone().unwrap_or_default()),
            (
                "destinationSkyId",
                self.destination_sky_id.clone().unwrap_or_default(),
            ),
            (
                "originEntityId",
                self.origin_entity_id.clone().unwrap_or_default(),
            ),
            (
                "destinationEntityId",
                self.destination_entity_id.clone().unwrap_or_default(),
            ),
            ("date", date(&self.departure_date)),
            ("returnDate", date(&self.return_date)),
            ("cabinClass", self.cabin_class.to_string()),
            ("adults", self.passengers.to_string()),
            ("sortBy", self.sort_order.to_string()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn one_way_jfk_lax() -> SearchCriteria {
        SearchCriteria {
            origin_sky_id: Some("JFK".to_string()),
            destination_sky_id: Some("LAX".to_string()),
            origin_entity_id: Some("95565058".to_string()),
            destination_entity_id: Some("95565077".to_string()),
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            return_date: None,
            ..SearchCriteria::default()
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing param {key}"))
    }

    #[test]
    fn one_way_sends_date_and_empty_return_date() {
        let params = one_way_jfk_lax().query_params();
        assert_eq!(param(&params, "originSkyId"), "JFK");
        assert_eq!(param(&params, "destinationSkyId"), "LAX");
        assert_eq!(param(&params, "date"), "2025-06-01");
        assert_eq!(param(&params, "returnDate"), "");
        assert_eq!(param(&params, "cabinClass"), "economy");
        assert_eq!(param(&params, "adults"), "1");
        assert_eq!(param(&params, "sortBy"), "best");
    }

    #[test]
    fn round_trip_sends_return_date() {
        let criteria = SearchCriteria {
            return_date: NaiveDate::from_ymd_opt(2025, 6, 8),
            ..one_way_jfk_lax()
        };
        assert_eq!(param(&criteria.query_params(), "returnDate"), "2025-06-08");
    }

    #[test]
    fn empty_criteria_serializes_without_panicking() {
        let params = SearchCriteria::default().query_params();
        assert_eq!(param(&params, "originSkyId"), "");
        assert_eq!(param(&params, "date"), "");
        assert_eq!(param(&params, "sortBy"), "best");
    }

    #[test]
    fn cabin_class_wire_values() {
        assert_eq!(CabinClass::Economy.to_string(), "economy");
        assert_eq!(CabinClass::PremiumEconomy.to_string(), "premium_economy");
        assert_eq!(CabinClass::Business.to_string(), "business");
        assert_eq!(CabinClass::First.to_string(), "first");
    }

    #[test]
    fn trip_type_return_date_collection() {
        assert!(TripType::RoundTrip.has_return());
        assert!(TripType::MultiCity.has_return());
        assert!(!TripType::OneWay.has_return());
    }
}
