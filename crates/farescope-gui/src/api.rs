use farescope_sdk::{ApiConfig, FlightApiClient};

/// The shared API client, or the configuration error that prevented
/// building one. Kept in Dioxus context so every component reaches the
/// same connection pool.
#[derive(Clone)]
pub struct ApiHandle(Result<FlightApiClient, String>);

impl ApiHandle {
    /// Build the client from the environment. A failure is kept as a
    /// displayable message; the UI stays up with lookups disabled.
    pub fn from_env() -> Self {
        let result = ApiConfig::from_env()
            .and_then(FlightApiClient::new)
            .map_err(|e| {
                tracing::warn!(error = %e, "API client unavailable");
                e.to_string()
            });
        Self(result)
    }

    pub fn client(&self) -> Option<FlightApiClient> {
        self.0.as_ref().ok().cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.0.as_ref().err().cloned()
    }
}
