//! Development-mode fixtures.
//!
//! Debug builds answer the locale lookup from a baked-in fixture with an
//! artificial delay, so the UI flows run without API credentials.

use std::time::Duration;

use farescope_models::LocaleResponse;

use crate::error::SdkError;

const LOCALE_FIXTURE: &str = include_str!("fixtures/get_locale.json");

/// Delay applied to mocked responses, matching a plausible round trip.
const RESPONSE_DELAY: Duration = Duration::from_millis(750);

/// Serve the locale fixture after [`RESPONSE_DELAY`].
pub(crate) async fn locale() -> Result<LocaleResponse, SdkError> {
    tokio::time::sleep(RESPONSE_DELAY).await;
    Ok(serde_json::from_str(LOCALE_FIXTURE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_fixture_parses() {
        let response: LocaleResponse = serde_json::from_str(LOCALE_FIXTURE).unwrap();
        assert!(response.status);
        assert_eq!(response.data.market, "en-US");
    }
}
