//! Ambee adapter - implements AirQualityPort using integration_ambee

use application::error::ApplicationError;
use application::ports::AirQualityPort;
use async_trait::async_trait;
use chrono::Utc;
use domain::{AqiReading, GeoLocation};
use integration_ambee::{AirQualityClient, AmbeeClient, AmbeeConfig, AmbeeError};
use tracing::{debug, instrument};

/// Adapter for the Ambee air-quality provider
pub struct AmbeeAdapter {
    client: AmbeeClient,
}

impl std::fmt::Debug for AmbeeAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbeeAdapter")
            .field("client", &"AmbeeClient")
            .finish()
    }
}

impl AmbeeAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: AmbeeConfig) -> Result<Self, ApplicationError> {
        let client =
            AmbeeClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration error to an application error
    fn map_error(err: AmbeeError) -> ApplicationError {
        match err {
            AmbeeError::ConnectionFailed(e)
            | AmbeeError::RequestFailed(e)
            | AmbeeError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            AmbeeError::ParseError(e) => ApplicationError::Internal(e),
            AmbeeError::NoStationData => {
                ApplicationError::ExternalService("No station data for location".into())
            },
            AmbeeError::RateLimitExceeded => {
                ApplicationError::ExternalService("Rate limit exceeded".into())
            },
        }
    }
}

#[async_trait]
impl AirQualityPort for AmbeeAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_latest(
        &self,
        city: &str,
        location: GeoLocation,
    ) -> Result<AqiReading, ApplicationError> {
        let reading = self
            .client
            .latest_by_location(location)
            .await
            .map_err(Self::map_error)?;

        debug!(aqi = reading.aqi, "Fetched provider reading");

        let observed_at = reading
            .updated_at
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        Ok(AqiReading::from_provider(
            reading.aqi,
            reading.pollutants,
            observed_at,
        ))
    }
}
