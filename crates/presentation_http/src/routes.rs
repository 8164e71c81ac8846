//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing and health endpoints
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health_check))
        // City readings
        .route("/api/cities", get(handlers::cities::list_cities))
        .route("/api/city/{name}", get(handlers::cities::city_detail))
        // Synthesized series
        .route("/api/forecast/{name}", get(handlers::forecast::forecast))
        .route("/api/hourly/{name}/{date}", get(handlers::forecast::hourly))
        // Calculations and advice
        .route("/api/predict-aqi", post(handlers::predict::predict_aqi))
        .route("/api/calculate-aqi", post(handlers::calculate::calculate_aqi))
        // Chatbot
        .route("/api/chatbot", post(handlers::chat::chatbot))
        // Attach state
        .with_state(state)
}
