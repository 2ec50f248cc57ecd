//! Locale bootstrap payload.
//!
//! Fetched once at startup from `GET /getLocale`; development builds serve
//! a baked-in mock instead (see `farescope-sdk`).

use serde::{Deserialize, Serialize};

/// Response body of `GET /getLocale`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LocaleResponse {
    /// Whether the lookup succeeded.
    pub status: bool,
    /// The resolved locale.
    pub data: Locale,
}

/// Market, currency and country resolved for the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// BCP 47 market tag, e.g. `"en-US"`.
    pub market: String,
    /// ISO 4217 currency code, e.g. `"USD"`.
    pub currency: String,
    /// ISO 3166 country code, e.g. `"US"`.
    pub country_code: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            market: "en-US".to_string(),
            currency: "USD".to_string(),
            country_code: "US".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_camel_case() {
        let json = r#"{"status":true,"data":{"market":"fr-FR","currency":"EUR","countryCode":"FR"}}"#;
        let response: LocaleResponse = serde_json::from_str(json).unwrap();
        assert!(response.status);
        assert_eq!(response.data.currency, "EUR");
    }
}
