//! Air-quality provider port

use async_trait::async_trait;
use domain::{AqiReading, GeoLocation};

use crate::error::ApplicationError;

/// Port for fetching live air-quality readings by coordinate.
///
/// Implementations may fail; the service layer converts every failure into
/// a synthetic fallback reading, so callers above the service never observe
/// a provider error.
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Fetch the latest reading for a location
    async fn fetch_latest(
        &self,
        city: &str,
        location: GeoLocation,
    ) -> Result<AqiReading, ApplicationError>;
}
