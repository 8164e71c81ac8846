//! Synthesized forecast and intraday series points
//!
//! These structs serialize directly to the wire shape the API exposes:
//! pollutant fields are flattened into the point object.

use crate::aqi::AqiCategory;
use crate::entities::Pollutants;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the 7-day synthesized forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Weekday name, e.g. "Monday"
    #[serde(rename = "dayName")]
    pub day_name: String,
    /// Synthesized AQI for the day
    pub aqi: i32,
    /// Category recomputed from this day's AQI
    pub quality: AqiCategory,
    /// Fraction-derived pollutant values
    #[serde(flatten)]
    pub pollutants: Pollutants,
    /// Simulated temperature in °C
    pub temperature: i32,
    /// Simulated relative humidity percentage
    pub humidity: i32,
}

/// One hour of the 24-hour synthesized intraday series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Zero-padded hour label, "00:00" through "23:00"
    pub hour: String,
    /// Synthesized AQI for the hour
    pub aqi: i32,
    /// Category recomputed from this hour's AQI
    pub quality: AqiCategory,
    /// Fraction-derived pollutant values
    #[serde(flatten)]
    pub pollutants: Pollutants,
    /// Simulated temperature in °C
    pub temperature: i32,
    /// Simulated relative humidity percentage
    pub humidity: i32,
}
