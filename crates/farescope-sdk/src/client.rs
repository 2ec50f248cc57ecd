//! High-level client for the external flight-search API.
//!
//! [`FlightApiClient`] owns a connection pool and the API-key headers, and
//! exposes one typed method per endpoint the UI consumes.

use reqwest::header::{HeaderMap, HeaderValue};

use farescope_models::{
    AirportOption, AirportSearchResponse, FlightSearchResponse, LocaleResponse, SearchCriteria,
};

use crate::config::ApiConfig;
use crate::error::SdkError;
use crate::mock;

/// A client for the flight-search API.
///
/// Cloning is cheap; the underlying `reqwest` pool is shared.
///
/// Requests are cancelled by dropping the returned future. The client does
/// not fence stale responses against fresh ones; callers racing multiple
/// lookups (keystroke autocomplete) must discard superseded results
/// themselves.
#[derive(Clone)]
pub struct FlightApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl FlightApiClient {
    /// Build a client with the API-key headers attached to every request.
    pub fn new(config: ApiConfig) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-rapidapi-key",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| SdkError::Config(format!("invalid API key: {e}")))?,
        );
        headers.insert(
            "x-rapidapi-host",
            HeaderValue::from_str(&config.host)
                .map_err(|e| SdkError::Config(format!("invalid API host: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    /// Look up airports matching a free-text query.
    ///
    /// An empty query is not sent to the network and resolves to no
    /// results. Non-airport entities (cities, countries) are filtered out
    /// of the response.
    pub async fn search_airports(&self, query: &str) -> Result<Vec<AirportOption>, SdkError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(query, "airport lookup");
        let url = format!("{}/flights/searchAirport", self.config.v1_base_url);
        let response = self
            .http
            .get(url)
            .query(&[("query", query)])
            .send()
            .await?;
        let body: AirportSearchResponse = Self::decode(response).await?;
        Ok(body.airport_options())
    }

    /// Run a flight search for the given criteria.
    ///
    /// Never fails synchronously on an incomplete criteria; absent fields
    /// serialize as empty query parameters and the API's behaviour governs
    /// the outcome.
    pub async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<FlightSearchResponse, SdkError> {
        tracing::debug!(
            origin = criteria.origin_sky_id.as_deref().unwrap_or(""),
            destination = criteria.destination_sky_id.as_deref().unwrap_or(""),
            "flight search"
        );
        let url = format!("{}/flights/searchFlights", self.config.v2_base_url);
        let response = self
            .http
            .get(url)
            .query(&criteria.query_params())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Resolve the client's market, currency and country.
    ///
    /// Debug builds serve a baked-in fixture after a short delay instead of
    /// calling the network, mirroring the development mock of the original
    /// deployment.
    pub async fn locale(&self) -> Result<LocaleResponse, SdkError> {
        if cfg!(debug_assertions) {
            return mock::locale().await;
        }

        let url = format!("{}/getLocale", self.config.v1_base_url);
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Check the status and decode a JSON body.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SdkError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FlightApiClient {
        FlightApiClient::new(ApiConfig::with_key("test-key")).unwrap()
    }

    #[tokio::test]
    async fn empty_query_skips_the_network() {
        // No server is running; an issued request would error out.
        let options = client().search_airports("").await.unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let result = FlightApiClient::new(ApiConfig::with_key("bad\nkey"));
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn config_is_kept() {
        assert_eq!(client().config().api_key, "test-key");
    }
}
