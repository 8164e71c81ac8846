//! Ambee air-quality client
//!
//! HTTP client for the Ambee `latest/by-lat-lng` air quality endpoint.

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{LatestReading, LatestResponse};

/// Ambee client errors
#[derive(Debug, Error)]
pub enum AmbeeError {
    /// Connection to the Ambee service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the Ambee service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the Ambee service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response contained no station data for the queried coordinates
    #[error("No station data for location")]
    NoStationData,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Ambee service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbeeConfig {
    /// Ambee API base URL (default: <https://api.ambeedata.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `x-api-key` header
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.ambeedata.com".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for AmbeeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Air quality client trait for fetching station data
#[async_trait]
pub trait AirQualityClient: Send + Sync {
    /// Get the latest air quality reading for a location
    async fn latest_by_location(&self, location: GeoLocation)
    -> Result<LatestReading, AmbeeError>;
}

/// Ambee HTTP client implementation
#[derive(Debug)]
pub struct AmbeeClient {
    client: Client,
    config: AmbeeConfig,
}

impl AmbeeClient {
    /// Create a new Ambee client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: AmbeeConfig) -> Result<Self, AmbeeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AmbeeError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for a latest-reading request
    fn build_latest_url(&self, location: GeoLocation) -> String {
        format!(
            "{}/latest/by-lat-lng?lat={}&lng={}",
            self.config.base_url,
            location.latitude(),
            location.longitude()
        )
    }
}

#[async_trait]
impl AirQualityClient for AmbeeClient {
    #[instrument(skip(self), fields(location = %location))]
    async fn latest_by_location(
        &self,
        location: GeoLocation,
    ) -> Result<LatestReading, AmbeeError> {
        let url = self.build_latest_url(location);
        debug!(url = %url, "Fetching latest air quality reading");

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| AmbeeError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AmbeeError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(AmbeeError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(AmbeeError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: LatestResponse = response
            .json()
            .await
            .map_err(|e| AmbeeError::ParseError(e.to_string()))?;

        api_response
            .stations
            .first()
            .map(LatestReading::from)
            .ok_or(AmbeeError::NoStationData)
    }
}
