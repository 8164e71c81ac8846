//! Air-quality service with guaranteed fallback
//!
//! Wraps the provider port so that every failure is converted into a
//! synthetic reading; callers always get a usable, category-consistent
//! reading back.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::{AqiReading, City};
use tracing::{info, instrument, warn};

use crate::ports::{AirQualityPort, RandomSource};

/// Synthetic fallback AQI range (inclusive)
const FALLBACK_AQI_RANGE: (i32, i32) = (50, 200);

/// Service producing air-quality readings for registered cities
pub struct AirQualityService {
    provider: Arc<dyn AirQualityPort>,
    rng: Arc<dyn RandomSource>,
}

impl fmt::Debug for AirQualityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirQualityService").finish_non_exhaustive()
    }
}

impl AirQualityService {
    /// Create a new service over a provider port and a random source
    pub fn new(provider: Arc<dyn AirQualityPort>, rng: Arc<dyn RandomSource>) -> Self {
        Self { provider, rng }
    }

    /// Fetch the latest reading for a city, never failing.
    ///
    /// Provider errors are logged and masked by a synthetic reading with an
    /// AQI sampled uniformly from [50, 200].
    #[instrument(skip(self, city), fields(city = %city.name))]
    pub async fn reading_for(&self, city: &City) -> AqiReading {
        let reading = match self.provider.fetch_latest(city.name, city.location).await {
            Ok(reading) => reading,
            Err(e) => {
                warn!(city = %city.name, error = %e, "Provider fetch failed, using synthetic reading");
                let (lo, hi) = FALLBACK_AQI_RANGE;
                AqiReading::synthetic(self.rng.int_in(lo, hi), Utc::now().to_rfc3339())
            },
        };

        info!(
            city = %city.name,
            aqi = reading.aqi,
            source = %reading.source,
            "Air-quality reading resolved"
        );

        reading
    }
}
