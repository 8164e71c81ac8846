//! Forecast and hourly series handlers
//!
//! Both endpoints fetch one live reading for the city and synthesize the
//! series from its AQI.

use axum::{Json, extract::Path, extract::State};
use chrono::Utc;
use domain::{ForecastDay, HourlyPoint};
use tracing::instrument;

use crate::{error::ApiError, handlers::cities::lookup, state::AppState};

/// Seven-day synthesized forecast for a city
#[instrument(skip(state), fields(city = %name))]
pub async fn forecast(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ForecastDay>>, ApiError> {
    let city = lookup(&name)?;
    let reading = state.air_quality.reading_for(city).await;

    Ok(Json(
        state.series.forecast(reading.aqi, Utc::now().date_naive()),
    ))
}

/// Twenty-four-hour synthesized series for a city.
///
/// The date segment is accepted for URL compatibility but does not affect
/// the generated series.
#[instrument(skip(state), fields(city = %name, date = %date))]
pub async fn hourly(
    State(state): State<AppState>,
    Path((name, date)): Path<(String, String)>,
) -> Result<Json<Vec<HourlyPoint>>, ApiError> {
    let city = lookup(&name)?;
    let reading = state.air_quality.reading_for(city).await;

    Ok(Json(state.series.hourly(reading.aqi)))
}
