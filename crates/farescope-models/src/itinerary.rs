//! Flight-search response types.
//!
//! These mirror the wire shape of `GET /flights/searchFlights`. The UI
//! treats them as read-only display data; only the fields the result cards
//! render are modelled.

use serde::{Deserialize, Serialize};

/// Response body of `GET /flights/searchFlights`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlightSearchResponse {
    /// Payload wrapper.
    pub data: ItineraryData,
}

/// Payload of a flight-search response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItineraryData {
    /// Priced flight options, in the API's requested sort order.
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

/// One priced flight option, composed of one or more legs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Flight segments. Round trips carry one leg per direction.
    pub legs: Vec<Leg>,
    /// Total price for the itinerary.
    pub price: Price,
}

impl Itinerary {
    /// The leg shown on the result card.
    ///
    /// Only the first leg of each itinerary is displayed; multi-leg
    /// itineraries are not fully represented.
    pub fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }
}

/// Price of an itinerary, pre-formatted by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Price {
    /// Display string, e.g. `"$347"`.
    pub formatted: String,
}

/// A single flight segment within an itinerary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Departure timestamp, naive local time (`2025-06-01T08:25:00`).
    pub departure: String,
    /// Arrival timestamp, naive local time.
    pub arrival: String,
    /// Total leg duration in minutes.
    pub duration_in_minutes: u32,
    /// Number of intermediate stops; zero for nonstop.
    pub stop_count: u32,
    /// Departure airport.
    pub origin: LegEndpoint,
    /// Arrival airport.
    pub destination: LegEndpoint,
    /// Operating and marketing carriers.
    pub carriers: Carriers,
}

/// Origin or destination airport of a leg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegEndpoint {
    /// IATA display code, e.g. `"JFK"`.
    pub display_code: String,
}

/// Carrier lists of a leg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Carriers {
    /// Marketing carriers; the first entry is displayed.
    #[serde(default)]
    pub marketing: Vec<Carrier>,
}

/// One airline on a leg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    /// Airline display name.
    pub name: String,
    /// Logo image URL.
    pub logo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": {
            "itineraries": [
                {
                    "legs": [
                        {
                            "departure": "2025-06-01T08:25:00",
                            "arrival": "2025-06-01T11:40:00",
                            "durationInMinutes": 375,
                            "stopCount": 0,
                            "origin": { "displayCode": "JFK" },
                            "destination": { "displayCode": "LAX" },
                            "carriers": {
                                "marketing": [
                                    { "name": "Delta", "logoUrl": "https://logos.example/dl.png" }
                                ]
                            }
                        }
                    ],
                    "price": { "formatted": "$347" }
                }
            ]
        }
    }"#;

    #[test]
    fn decodes_sample_response() {
        let response: FlightSearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let itinerary = &response.data.itineraries[0];
        let leg = itinerary.first_leg().unwrap();
        assert_eq!(leg.origin.display_code, "JFK");
        assert_eq!(leg.destination.display_code, "LAX");
        assert_eq!(leg.duration_in_minutes, 375);
        assert_eq!(leg.stop_count, 0);
        assert_eq!(leg.carriers.marketing[0].name, "Delta");
        assert_eq!(itinerary.price.formatted, "$347");
    }

    #[test]
    fn first_leg_of_empty_itinerary_is_none() {
        let itinerary = Itinerary {
            legs: Vec::new(),
            price: Price {
                formatted: "$0".to_string(),
            },
        };
        assert!(itinerary.first_leg().is_none());
    }

    #[test]
    fn missing_itineraries_defaults_empty() {
        let response: FlightSearchResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(response.data.itineraries.is_empty());
    }
}
