//! Endpoint and credential configuration.
//!
//! Base URLs and the API key are supplied through the environment at
//! startup. The v1 and v2 bases differ because the provider versions the
//! autocomplete and flight-search endpoints independently.

use crate::error::SdkError;

const DEFAULT_V1_BASE: &str = "https://sky-scrapper.p.rapidapi.com/api/v1";
const DEFAULT_V2_BASE: &str = "https://sky-scrapper.p.rapidapi.com/api/v2";
const DEFAULT_HOST: &str = "sky-scrapper.p.rapidapi.com";

/// Connection settings for the external flight API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the v1 endpoints (airport autocomplete, locale).
    pub v1_base_url: String,
    /// Base URL of the v2 endpoints (flight search).
    pub v2_base_url: String,
    /// Value of the `x-rapidapi-host` header.
    pub host: String,
    /// Value of the `x-rapidapi-key` header.
    pub api_key: String,
}

impl ApiConfig {
    /// Resolve the configuration from the environment.
    ///
    /// `FARESCOPE_API_KEY` is required; `FARESCOPE_V1_BASE_URL`,
    /// `FARESCOPE_V2_BASE_URL` and `FARESCOPE_API_HOST` override the
    /// provider defaults. Debug builds fall back to a placeholder key so
    /// the mocked flows still run without credentials.
    pub fn from_env() -> Result<Self, SdkError> {
        let api_key = match std::env::var("FARESCOPE_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ if cfg!(debug_assertions) => "dev-placeholder-key".to_string(),
            _ => {
                return Err(SdkError::Config(
                    "FARESCOPE_API_KEY is not set".to_string(),
                ))
            }
        };

        Ok(Self {
            v1_base_url: std::env::var("FARESCOPE_V1_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_V1_BASE.to_string()),
            v2_base_url: std::env::var("FARESCOPE_V2_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_V2_BASE.to_string()),
            host: std::env::var("FARESCOPE_API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            api_key,
        })
    }

    /// Build a configuration with explicit values (tests, tooling).
    pub fn with_key(api_key: &str) -> Self {
        Self {
            v1_base_url: DEFAULT_V1_BASE.to_string(),
            v2_base_url: DEFAULT_V2_BASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            api_key: api_key.to_string(),
        }
    }
}
