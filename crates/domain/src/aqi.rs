//! AQI categorization and pollutant breakpoint math
//!
//! Implements the simplified US-EPA style derivation: true piecewise-linear
//! interpolation for PM2.5 and PM10, linear approximations for the gaseous
//! pollutants, worst pollutant dominating the overall index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality category derived from a numeric AQI (0-500 scale)
///
/// Variants are declared in increasing severity, so the derived ordering
/// matches the health-impact ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AqiCategory {
    /// AQI 0-50
    Good,
    /// AQI 51-100
    Moderate,
    /// AQI 101-150
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthySensitive,
    /// AQI 151-200
    Unhealthy,
    /// AQI 201-300
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    /// AQI 301+
    Hazardous,
}

impl AqiCategory {
    /// Map a numeric AQI to its category (band upper bounds inclusive)
    #[must_use]
    pub const fn from_aqi(aqi: i32) -> Self {
        if aqi <= 50 {
            Self::Good
        } else if aqi <= 100 {
            Self::Moderate
        } else if aqi <= 150 {
            Self::UnhealthySensitive
        } else if aqi <= 200 {
            Self::Unhealthy
        } else if aqi <= 300 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    /// Human-readable label (also the JSON wire label)
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// (concentration low, concentration high, AQI low, AQI high)
type Breakpoint = (f64, f64, f64, f64);

/// PM2.5 breakpoints (µg/m³)
const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    (0.0, 12.0, 0.0, 50.0),
    (12.1, 35.4, 51.0, 100.0),
    (35.5, 55.4, 101.0, 150.0),
    (55.5, 150.4, 151.0, 200.0),
    (150.5, 250.4, 201.0, 300.0),
    (250.5, 500.4, 301.0, 500.0),
];

/// PM10 breakpoints (µg/m³)
const PM10_BREAKPOINTS: [Breakpoint; 6] = [
    (0.0, 54.0, 0.0, 50.0),
    (55.0, 154.0, 51.0, 100.0),
    (155.0, 254.0, 101.0, 150.0),
    (255.0, 354.0, 151.0, 200.0),
    (355.0, 424.0, 201.0, 300.0),
    (425.0, 604.0, 301.0, 500.0),
];

/// Interpolate an individual pollutant AQI from its breakpoint table.
///
/// Concentrations above every tabulated band return 500 (hazardous cap).
fn interpolate(concentration: f64, breakpoints: &[Breakpoint]) -> f64 {
    for &(conc_lo, conc_hi, aqi_lo, aqi_hi) in breakpoints {
        if concentration >= conc_lo && concentration <= conc_hi {
            return (aqi_hi - aqi_lo) / (conc_hi - conc_lo) * (concentration - conc_lo) + aqi_lo;
        }
    }
    500.0
}

/// Compute an overall AQI from six pollutant concentrations.
///
/// PM2.5 and PM10 use breakpoint interpolation; O3, NO2, SO2 and CO use
/// linear approximations capped at 500. The worst pollutant dominates.
/// The result is left unrounded; callers round for display.
#[must_use]
pub fn aqi_from_pollutants(pm25: f64, pm10: f64, o3: f64, no2: f64, so2: f64, co: f64) -> f64 {
    let pm25_aqi = interpolate(pm25, &PM25_BREAKPOINTS);
    let pm10_aqi = interpolate(pm10, &PM10_BREAKPOINTS);

    let o3_aqi = 500.0_f64.min(o3 * 1.5);
    let no2_aqi = 500.0_f64.min(no2 * 2.0);
    let so2_aqi = 500.0_f64.min(so2 * 3.0);
    let co_aqi = 500.0_f64.min(co * 10.0);

    pm25_aqi
        .max(pm10_aqi)
        .max(o3_aqi)
        .max(no2_aqi)
        .max(so2_aqi)
        .max(co_aqi)
}
