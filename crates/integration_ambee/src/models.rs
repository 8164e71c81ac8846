//! Ambee API response models

use domain::Pollutants;
use serde::{Deserialize, Serialize};

/// Response body of the `latest/by-lat-lng` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LatestResponse {
    /// Monitoring stations reporting for the queried coordinates
    #[serde(default)]
    pub stations: Vec<Station>,
}

/// A single station record as returned by Ambee
///
/// Pollutant fields may be absent or `null`; missing values default to zero
/// when normalizing into a [`LatestReading`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Composite air quality index reported by the station
    #[serde(rename = "AQI")]
    pub aqi: Option<f64>,

    /// Fine particulate matter (µg/m³)
    #[serde(rename = "PM25")]
    pub pm25: Option<f64>,

    /// Coarse particulate matter (µg/m³)
    #[serde(rename = "PM10")]
    pub pm10: Option<f64>,

    /// Ground-level ozone (ppb)
    #[serde(rename = "OZONE")]
    pub ozone: Option<f64>,

    /// Nitrogen dioxide (ppb)
    #[serde(rename = "NO2")]
    pub no2: Option<f64>,

    /// Sulfur dioxide (ppb)
    #[serde(rename = "SO2")]
    pub so2: Option<f64>,

    /// Carbon monoxide (ppm)
    #[serde(rename = "CO")]
    pub co: Option<f64>,

    /// Timestamp of the station's last update
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Normalized reading extracted from the first reporting station
#[derive(Debug, Clone, PartialEq)]
pub struct LatestReading {
    /// Reported AQI, rounded to the nearest integer
    pub aqi: i32,
    /// Pollutant concentrations with missing values zeroed
    pub pollutants: Pollutants,
    /// Station update timestamp, if the station reported one
    pub updated_at: Option<String>,
}

impl From<&Station> for LatestReading {
    #[allow(clippy::cast_possible_truncation)]
    fn from(station: &Station) -> Self {
        Self {
            aqi: station.aqi.unwrap_or(0.0).round() as i32,
            pollutants: Pollutants {
                pm25: station.pm25.unwrap_or(0.0),
                pm10: station.pm10.unwrap_or(0.0),
                o3: station.ozone.unwrap_or(0.0),
                no2: station.no2.unwrap_or(0.0),
                so2: station.so2.unwrap_or(0.0),
                co: station.co.unwrap_or(0.0),
            },
            updated_at: station.updated_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_station_with_nulls() {
        let json = r#"{"AQI": 152, "PM25": 57.3, "PM10": null, "NO2": 12.0}"#;
        let station: Station = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(station.aqi, Some(152.0));
        assert_eq!(station.pm10, None);
        assert_eq!(station.so2, None);
    }

    #[test]
    fn test_reading_zeroes_missing_pollutants() {
        let station = Station {
            aqi: Some(87.6),
            pm25: Some(28.4),
            pm10: None,
            ozone: None,
            no2: Some(9.1),
            so2: None,
            co: None,
            updated_at: Some("2026-08-29T10:00:00.000Z".to_string()),
        };

        let reading = LatestReading::from(&station);
        assert_eq!(reading.aqi, 88);
        assert!((reading.pollutants.pm25 - 28.4).abs() < f64::EPSILON);
        assert!(reading.pollutants.pm10.abs() < f64::EPSILON);
        assert!(reading.pollutants.co.abs() < f64::EPSILON);
        assert_eq!(reading.updated_at.as_deref(), Some("2026-08-29T10:00:00.000Z"));
    }

    #[test]
    fn test_deserialize_empty_stations() {
        let json = r#"{"message": "no data", "stations": []}"#;
        let response: LatestResponse = serde_json::from_str(json).expect("should deserialize");
        assert!(response.stations.is_empty());
    }

    #[test]
    fn test_deserialize_missing_stations_field() {
        let json = r#"{"message": "no data"}"#;
        let response: LatestResponse = serde_json::from_str(json).expect("should deserialize");
        assert!(response.stations.is_empty());
    }
}
