//! AQI prediction with health advice

use axum::{Json, extract::State};
use chrono::Utc;
use domain::{AqiCategory, CityRegistry};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Prediction request
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Requester's name, echoed back
    #[serde(default)]
    pub name: Option<String>,
    /// City to evaluate
    #[serde(default)]
    pub city: String,
    /// Requester's age, drives the advice rules; numbers or numeric strings
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    /// Optional phone number for severe-AQI SMS alerts
    #[serde(default)]
    pub phone: Option<String>,
}

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub name: Option<String>,
    pub city: String,
    pub aqi: i32,
    pub quality: AqiCategory,
    pub advice: &'static str,
    pub timestamp: String,
}

/// Coerce a JSON value into an age: integers pass through, fractional
/// numbers truncate, numeric strings are parsed.
fn coerce_age(value: Option<&serde_json::Value>) -> Result<i64, ApiError> {
    let invalid = || ApiError::BadRequest("Invalid age provided".to_string());

    match value {
        None => Ok(0),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(invalid),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
            tracing::debug!(value = %s, "Non-numeric age value");
            invalid()
        }),
        Some(_) => Err(invalid()),
    }
}

/// Evaluate current air quality for a city and derive age-aware advice
#[instrument(skip(state, request), fields(city = %request.city))]
pub async fn predict_aqi(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let age = coerce_age(request.age.as_ref())?;

    let Some(city) = CityRegistry::lookup(&request.city) else {
        return Err(ApiError::BadRequest("City not supported".to_string()));
    };

    let reading = state.air_quality.reading_for(city).await;
    let advice = application::AdviceService::advise(reading.aqi, age);

    state
        .advice
        .notify_if_severe(reading.aqi, request.phone.as_deref(), advice)
        .await;

    Ok(Json(PredictResponse {
        name: request.name,
        city: city.name.to_string(),
        aqi: reading.aqi,
        quality: reading.category,
        advice,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
