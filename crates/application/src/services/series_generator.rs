//! Synthetic forecast and intraday series generation
//!
//! Both series are seeded from one base AQI reading: deterministic in
//! structure (7 days, 24 hours), stochastic in value through the injected
//! random source.

use std::{fmt, sync::Arc};

use chrono::{Duration, NaiveDate};
use domain::{AqiCategory, ForecastDay, HourlyPoint, Pollutants};

use crate::ports::RandomSource;

/// Synthesized values are clamped to this inclusive AQI range
const SERIES_AQI_RANGE: (i32, i32) = (20, 300);

/// Simulated temperature range in °C
const TEMPERATURE_RANGE: (i32, i32) = (25, 40);

/// Simulated relative humidity range in percent
const HUMIDITY_RANGE: (i32, i32) = (30, 80);

/// Generator for synthesized forecast/hourly series
pub struct SeriesGenerator {
    rng: Arc<dyn RandomSource>,
}

impl fmt::Debug for SeriesGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesGenerator").finish_non_exhaustive()
    }
}

impl SeriesGenerator {
    /// Create a generator over a random source
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Synthesize a 7-day forecast from a base AQI, starting at `today`.
    ///
    /// Each day perturbs the base by U[-30, 30], clamps to [20, 300] and
    /// recomputes the category from the day's own AQI.
    #[must_use]
    pub fn forecast(&self, base_aqi: i32, today: NaiveDate) -> Vec<ForecastDay> {
        (0..7)
            .map(|i| {
                let date = today + Duration::days(i);
                let day_aqi = self.clamped(base_aqi + self.rng.int_in(-30, 30));

                ForecastDay {
                    date,
                    day_name: date.format("%A").to_string(),
                    aqi: day_aqi,
                    quality: AqiCategory::from_aqi(day_aqi),
                    pollutants: Pollutants::from_aqi_fractions(day_aqi),
                    temperature: self.rng.int_in(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1),
                    humidity: self.rng.int_in(HUMIDITY_RANGE.0, HUMIDITY_RANGE.1),
                }
            })
            .collect()
    }

    /// Synthesize a 24-hour intraday series from a base AQI.
    ///
    /// Rush hours (07-10, 17-20) scale the base by 1.3, early morning
    /// (02-06) by 0.7; each hour is then perturbed by U[-15, 15] and
    /// clamped to [20, 300].
    #[must_use]
    pub fn hourly(&self, base_aqi: i32) -> Vec<HourlyPoint> {
        (0u32..24)
            .map(|hour| {
                let multiplier = Self::time_of_day_multiplier(hour);
                let scaled = (f64::from(base_aqi) * multiplier).round() as i32;
                let hour_aqi = self.clamped(scaled + self.rng.int_in(-15, 15));

                HourlyPoint {
                    hour: format!("{hour:02}:00"),
                    aqi: hour_aqi,
                    quality: AqiCategory::from_aqi(hour_aqi),
                    pollutants: Pollutants::from_aqi_fractions(hour_aqi),
                    temperature: self.rng.int_in(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1),
                    humidity: self.rng.int_in(HUMIDITY_RANGE.0, HUMIDITY_RANGE.1),
                }
            })
            .collect()
    }

    const fn time_of_day_multiplier(hour: u32) -> f64 {
        match hour {
            7..=10 | 17..=20 => 1.3,
            2..=6 => 0.7,
            _ => 1.0,
        }
    }

    fn clamped(&self, aqi: i32) -> i32 {
        aqi.clamp(SERIES_AQI_RANGE.0, SERIES_AQI_RANGE.1)
    }
}
