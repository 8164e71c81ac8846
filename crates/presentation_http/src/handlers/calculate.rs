//! AQI calculation handler
//!
//! Accepts pollutant concentrations as numbers or numeric strings, the way
//! lenient JSON clients tend to send them. Missing fields default to zero.

use axum::{Json, extract::State};
use chrono::Utc;
use domain::{AqiCategory, Pollutants, aqi_from_pollutants};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Calculation request; every field optional
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    pub pm25: Option<serde_json::Value>,
    pub pm10: Option<serde_json::Value>,
    pub o3: Option<serde_json::Value>,
    pub no2: Option<serde_json::Value>,
    pub so2: Option<serde_json::Value>,
    pub co: Option<serde_json::Value>,
}

/// Calculation response
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub aqi: i64,
    pub quality: AqiCategory,
    pub pollutants: Pollutants,
    pub calculation_time: String,
}

/// Coerce a JSON value into a concentration: numbers pass through, numeric
/// strings are parsed, anything else is rejected.
fn coerce(field: &str, value: Option<&serde_json::Value>) -> Result<f64, ApiError> {
    let invalid = || ApiError::BadRequest("Invalid pollutant values provided".to_string());

    match value {
        None => Ok(0.0),
        Some(serde_json::Value::Number(n)) => n.as_f64().ok_or_else(invalid),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            tracing::debug!(field, value = %s, "Non-numeric pollutant value");
            invalid()
        }),
        Some(_) => Err(invalid()),
    }
}

/// Compute an AQI from submitted pollutant concentrations
#[instrument(skip_all)]
pub async fn calculate_aqi(
    State(_state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let pollutants = Pollutants {
        pm25: coerce("pm25", request.pm25.as_ref())?,
        pm10: coerce("pm10", request.pm10.as_ref())?,
        o3: coerce("o3", request.o3.as_ref())?,
        no2: coerce("no2", request.no2.as_ref())?,
        so2: coerce("so2", request.so2.as_ref())?,
        co: coerce("co", request.co.as_ref())?,
    };

    let aqi = aqi_from_pollutants(
        pollutants.pm25,
        pollutants.pm10,
        pollutants.o3,
        pollutants.no2,
        pollutants.so2,
        pollutants.co,
    );

    #[allow(clippy::cast_possible_truncation)]
    let rounded = aqi.round() as i64;

    Ok(Json(CalculateResponse {
        aqi: rounded,
        quality: AqiCategory::from_aqi(rounded as i32),
        pollutants,
        calculation_time: Utc::now().to_rfc3339(),
    }))
}
