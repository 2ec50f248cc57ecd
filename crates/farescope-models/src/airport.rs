//! Airport autocomplete types.
//!
//! The autocomplete endpoint returns a list of location records of mixed
//! entity types (cities, countries, airports). Only airport records carry
//! the identifiers a flight search needs, so the list is filtered before
//! it reaches the UI.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Response body of `GET /flights/searchAirport`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AirportSearchResponse {
    /// Matching location records, airports and otherwise.
    #[serde(default)]
    pub data: Vec<AirportRecord>,
}

/// One location record from the autocomplete endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    /// Human-readable presentation fields.
    pub presentation: AirportPresentation,
    /// Routing identifiers and entity classification.
    pub navigation: AirportNavigation,
}

/// Presentation fields of an autocomplete record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AirportPresentation {
    /// Display title, e.g. `"New York John F. Kennedy (JFK)"`.
    pub suggestion_title: String,
}

/// Navigation fields of an autocomplete record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AirportNavigation {
    /// Entity classification, `"AIRPORT"` for airport records.
    pub entity_type: String,
    /// The identifiers a flight search is keyed on.
    pub relevant_flight_params: RelevantFlightParams,
}

/// Search identifiers carried by an autocomplete record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelevantFlightParams {
    /// External API airport identifier, e.g. `"JFK"`.
    pub sky_id: String,
    /// External API location entity identifier.
    pub entity_id: String,
}

impl AirportRecord {
    /// Whether this record is an airport (as opposed to a city or country).
    pub fn is_airport(&self) -> bool {
        self.navigation.entity_type == "AIRPORT"
    }
}

// ---------------------------------------------------------------------------
// AirportOption
// ---------------------------------------------------------------------------

/// One selectable entry in an airport autocomplete field.
///
/// Transient: held only in UI state and recreated on every query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AirportOption {
    /// Display label shown in the dropdown.
    pub label: String,
    /// External API airport identifier.
    pub sky_id: String,
    /// External API location entity identifier.
    pub entity_id: String,
}

impl From<&AirportRecord> for AirportOption {
    fn from(record: &AirportRecord) -> Self {
        Self {
            label: record.presentation.suggestion_title.clone(),
            sky_id: record.navigation.relevant_flight_params.sky_id.clone(),
            entity_id: record.navigation.relevant_flight_params.entity_id.clone(),
        }
    }
}

impl AirportSearchResponse {
    /// Filter to airport-type records and map them into [`AirportOption`]s.
    ///
    /// Non-airport entities (cities, countries) are dropped.
    pub fn airport_options(&self) -> Vec<AirportOption> {
        self.data
            .iter()
            .filter(|r| r.is_airport())
            .map(AirportOption::from)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
