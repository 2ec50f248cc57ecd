//! # Farescope SDK
//!
//! HTTP client for the external flight-search API used by the Farescope
//! desktop client.
//!
//! The SDK provides:
//!
//! * [`FlightApiClient`] — authenticated client for the airport
//!   autocomplete and flight-search endpoints.
//! * [`ApiConfig`] — endpoint and API-key configuration, resolved from
//!   the environment.
//! * [`SdkError`] — unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use farescope_sdk::{ApiConfig, FlightApiClient};
//!
//! # async fn run() -> Result<(), farescope_sdk::SdkError> {
//! let client = FlightApiClient::new(ApiConfig::from_env()?)?;
//! let airports = client.search_airports("new york").await?;
//! println!("{} airports", airports.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
mod mock;

pub use client::FlightApiClient;
pub use config::ApiConfig;
pub use error::SdkError;
