//! City listing and per-city detail handlers

use axum::{Json, extract::Path, extract::State};
use domain::{AqiCategory, City, CityRegistry, DataSource, Pollutants};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// One row of the all-cities listing; pollutants are flattened
#[derive(Debug, Serialize)]
pub struct CitySummary {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub aqi: i32,
    pub quality: AqiCategory,
    #[serde(flatten)]
    pub pollutants: Pollutants,
    pub temperature: i32,
    pub humidity: i32,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub source: DataSource,
}

/// Simulated weather block on the city detail response
#[derive(Debug, Serialize)]
pub struct Weather {
    pub temperature: i32,
    pub humidity: i32,
    #[serde(rename = "windSpeed")]
    pub wind_speed: i32,
    pub pressure: i32,
}

/// Per-city detail; pollutants stay nested here
#[derive(Debug, Serialize)]
pub struct CityDetail {
    pub city: String,
    pub aqi: i32,
    pub quality: AqiCategory,
    pub lat: f64,
    pub lng: f64,
    pub pollutants: Pollutants,
    pub weather: Weather,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub source: DataSource,
}

/// List current readings for all registered cities, in registry order
#[instrument(skip(state))]
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<CitySummary>> {
    let mut cities = Vec::with_capacity(CityRegistry::LEN);

    for city in CityRegistry::all() {
        let reading = state.air_quality.reading_for(city).await;
        cities.push(CitySummary {
            name: city.name,
            lat: city.location.latitude(),
            lng: city.location.longitude(),
            aqi: reading.aqi,
            quality: reading.category,
            pollutants: reading.pollutants,
            temperature: state.rng.int_in(25, 40),
            humidity: state.rng.int_in(30, 80),
            last_updated: reading.observed_at,
            source: reading.source,
        });
    }

    Json(cities)
}

/// Detail for a single city, 404 for unregistered names
#[instrument(skip(state), fields(city = %name))]
pub async fn city_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CityDetail>, ApiError> {
    let city = lookup(&name)?;
    let reading = state.air_quality.reading_for(city).await;

    Ok(Json(CityDetail {
        city: city.name.to_string(),
        aqi: reading.aqi,
        quality: reading.category,
        lat: city.location.latitude(),
        lng: city.location.longitude(),
        pollutants: reading.pollutants,
        weather: Weather {
            temperature: state.rng.int_in(25, 40),
            humidity: state.rng.int_in(30, 80),
            wind_speed: state.rng.int_in(5, 25),
            pressure: state.rng.int_in(990, 1020),
        },
        last_updated: reading.observed_at,
        source: reading.source,
    }))
}

/// Resolve a city name against the registry
pub(crate) fn lookup(name: &str) -> Result<&'static City, ApiError> {
    CityRegistry::lookup(name).ok_or_else(|| ApiError::NotFound("City not found".to_string()))
}
