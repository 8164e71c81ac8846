//! Air-quality reading entity

use crate::aqi::AqiCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Six pollutant concentrations carried on every reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pollutants {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

impl Pollutants {
    /// Derive pollutant values as fixed fractions of an AQI, each truncated
    /// to an integer value (the synthetic-reading convention).
    #[must_use]
    pub fn from_aqi_fractions(aqi: i32) -> Self {
        let aqi = f64::from(aqi);
        Self {
            pm25: (aqi * 0.6).trunc(),
            pm10: (aqi * 0.8).trunc(),
            o3: (aqi * 0.4).trunc(),
            no2: (aqi * 0.3).trunc(),
            so2: (aqi * 0.2).trunc(),
            co: (aqi * 0.1).trunc(),
        }
    }
}

/// Where a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// Live data from the Ambee provider
    #[serde(rename = "Ambee API")]
    Provider,
    /// Locally fabricated fallback data
    #[serde(rename = "Mock Data")]
    Synthetic,
}

impl DataSource {
    /// Wire label for this source
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Provider => "Ambee API",
            Self::Synthetic => "Mock Data",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single air-quality reading for one location
///
/// Invariant: `category` always equals `AqiCategory::from_aqi(aqi)`; the
/// constructors below are the only places a reading is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    /// Numeric AQI (0-500 scale)
    pub aqi: i32,
    /// Category derived from `aqi`
    pub category: AqiCategory,
    /// Pollutant concentrations
    pub pollutants: Pollutants,
    /// ISO-8601 observation timestamp
    pub observed_at: String,
    /// Data provenance
    pub source: DataSource,
}

impl AqiReading {
    /// Build a reading from live provider data.
    ///
    /// The category is always recomputed from the numeric AQI, never taken
    /// from the provider.
    #[must_use]
    pub fn from_provider(aqi: i32, pollutants: Pollutants, observed_at: String) -> Self {
        Self {
            aqi,
            category: AqiCategory::from_aqi(aqi),
            pollutants,
            observed_at,
            source: DataSource::Provider,
        }
    }

    /// Build a synthetic fallback reading with fraction-derived pollutants.
    #[must_use]
    pub fn synthetic(aqi: i32, observed_at: String) -> Self {
        Self {
            aqi,
            category: AqiCategory::from_aqi(aqi),
            pollutants: Pollutants::from_aqi_fractions(aqi),
            observed_at,
            source: DataSource::Synthetic,
        }
    }
}
