//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    AdviceService, AirQualityService, ChatService, SeriesGenerator,
    error::ApplicationError,
    ports::{AirQualityPort, InferencePort, RandomSource, SmsPort},
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::{AqiReading, GeoLocation, Pollutants};
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;

/// Stub provider returning a fixed AQI for every city
struct StubProvider {
    aqi: i32,
}

#[async_trait]
impl AirQualityPort for StubProvider {
    async fn fetch_latest(
        &self,
        _city: &str,
        _location: GeoLocation,
    ) -> Result<AqiReading, ApplicationError> {
        Ok(AqiReading::from_provider(
            self.aqi,
            Pollutants::from_aqi_fractions(self.aqi),
            "2026-08-29T10:00:00.000Z".to_string(),
        ))
    }
}

/// Provider that always fails, forcing the synthetic fallback
struct FailingProvider;

#[async_trait]
impl AirQualityPort for FailingProvider {
    async fn fetch_latest(
        &self,
        _city: &str,
        _location: GeoLocation,
    ) -> Result<AqiReading, ApplicationError> {
        Err(ApplicationError::ExternalService("timeout".to_string()))
    }
}

/// Stub inference backend
struct StubInference {
    reply: Option<String>,
}

#[async_trait]
impl InferencePort for StubInference {
    async fn generate(&self, _prompt: &str) -> Result<String, ApplicationError> {
        self.reply
            .clone()
            .ok_or_else(|| ApplicationError::Inference("model down".to_string()))
    }
}

/// SMS stub that always succeeds
struct StubSms;

#[async_trait]
impl SmsPort for StubSms {
    async fn send_alert(
        &self,
        _phone: &str,
        _aqi: i32,
        _advice: &str,
    ) -> Result<(), ApplicationError> {
        Ok(())
    }
}

/// Deterministic random source returning the range midpoint
struct MidpointRandom;

impl RandomSource for MidpointRandom {
    fn int_in(&self, lo: i32, hi: i32) -> i32 {
        (lo + hi) / 2
    }
}

fn build_state(provider: Arc<dyn AirQualityPort>, inference: Arc<dyn InferencePort>) -> AppState {
    let rng: Arc<dyn RandomSource> = Arc::new(MidpointRandom);
    AppState {
        air_quality: Arc::new(AirQualityService::new(provider, Arc::clone(&rng))),
        series: Arc::new(SeriesGenerator::new(Arc::clone(&rng))),
        advice: Arc::new(AdviceService::new(Arc::new(StubSms))),
        chat: Arc::new(ChatService::new(inference)),
        rng,
    }
}

fn create_test_server_with_aqi(aqi: i32) -> TestServer {
    let state = build_state(
        Arc::new(StubProvider { aqi }),
        Arc::new(StubInference {
            reply: Some("AQI measures air pollution severity.".to_string()),
        }),
    );
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_test_server_with_aqi(142)
}

// ============================================================================
// Landing and health
// ============================================================================

#[tokio::test]
async fn index_lists_endpoints_and_cities() {
    let server = create_test_server();
    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("GET /api/cities"));
    assert!(body.contains("POST /api/chatbot"));
    assert!(body.contains("Delhi"));
    assert!(body.contains("Surat"));
}

#[tokio::test]
async fn health_check_returns_ok() {
    let server = create_test_server();
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

// ============================================================================
// City readings
// ============================================================================

#[tokio::test]
async fn cities_returns_twenty_in_registry_order() {
    let server = create_test_server();
    let response = server.get("/api/cities").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cities = body.as_array().expect("array body");

    assert_eq!(cities.len(), 20);
    assert_eq!(cities[0]["name"], "Delhi");
    assert_eq!(cities[1]["name"], "Mumbai");
    assert_eq!(cities[19]["name"], "Surat");

    // Flattened pollutants and renamed timestamp on every row
    assert_eq!(cities[0]["aqi"], 142);
    assert_eq!(cities[0]["quality"], "Unhealthy for Sensitive Groups");
    assert!(cities[0]["pm25"].is_number());
    assert_eq!(cities[0]["lastUpdated"], "2026-08-29T10:00:00.000Z");
    assert_eq!(cities[0]["source"], "Ambee API");
}

#[tokio::test]
async fn city_detail_returns_coordinates_and_weather() {
    let server = create_test_server();
    let response = server.get("/api/city/Delhi").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["city"], "Delhi");
    assert!((body["lat"].as_f64().expect("lat") - 28.6139).abs() < 1e-6);
    assert!((body["lng"].as_f64().expect("lng") - 77.2090).abs() < 1e-6);
    assert_eq!(body["aqi"], 142);
    assert!(body["pollutants"]["pm25"].is_number());
    // Midpoint random: temperature (25+40)/2, windSpeed (5+25)/2, pressure (990+1020)/2
    assert_eq!(body["weather"]["temperature"], 32);
    assert_eq!(body["weather"]["windSpeed"], 15);
    assert_eq!(body["weather"]["pressure"], 1005);
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let server = create_test_server();
    let response = server.get("/api/city/Atlantis").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "City not found");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn provider_failure_yields_synthetic_readings() {
    let state = build_state(
        Arc::new(FailingProvider),
        Arc::new(StubInference { reply: None }),
    );
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server.get("/api/city/Delhi").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["source"], "Mock Data");
    let aqi = body["aqi"].as_i64().expect("aqi");
    assert!((50..=200).contains(&aqi));
    // Midpoint of [50, 200]
    assert_eq!(aqi, 125);
}

// ============================================================================
// Synthesized series
// ============================================================================

#[tokio::test]
async fn forecast_returns_seven_increasing_days() {
    let server = create_test_server();
    let response = server.get("/api/forecast/Mumbai").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let days = body.as_array().expect("array body");

    assert_eq!(days.len(), 7);
    let dates: Vec<&str> = days
        .iter()
        .map(|d| d["date"].as_str().expect("date"))
        .collect();
    for pair in dates.windows(2) {
        assert!(pair[0] < pair[1], "dates must strictly increase");
    }
    for day in days {
        let aqi = day["aqi"].as_i64().expect("aqi");
        assert!((20..=300).contains(&aqi));
        assert!(day["dayName"].is_string());
        assert!(day["quality"].is_string());
    }
}

#[tokio::test]
async fn forecast_unknown_city_is_not_found() {
    let server = create_test_server();
    server
        .get("/api/forecast/Gotham")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn hourly_returns_ordered_labels() {
    let server = create_test_server();
    let response = server.get("/api/hourly/Chennai/2026-08-29").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let points = body.as_array().expect("array body");

    assert_eq!(points.len(), 24);
    assert_eq!(points[0]["hour"], "00:00");
    assert_eq!(points[23]["hour"], "23:00");
    for point in points {
        let aqi = point["aqi"].as_i64().expect("aqi");
        assert!((20..=300).contains(&aqi));
    }
}

#[tokio::test]
async fn hourly_date_segment_is_ignored() {
    let server = create_test_server();
    // Nonsense date still works; only the city matters
    let response = server.get("/api/hourly/Chennai/not-a-date").await;
    response.assert_status_ok();
}

// ============================================================================
// AQI calculation
// ============================================================================

#[tokio::test]
async fn calculate_from_breakpoint_concentrations() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate-aqi")
        .json(&json!({"pm25": 12, "pm10": 54}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["aqi"], 50);
    assert_eq!(body["quality"], "Good");
    assert_eq!(body["pollutants"]["pm25"], 12.0);
    assert_eq!(body["pollutants"]["pm10"], 54.0);
    assert!(body["calculation_time"].is_string());
}

#[tokio::test]
async fn calculate_accepts_numeric_strings() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate-aqi")
        .json(&json!({"o3": "400"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    // 400 * 1.5 capped at 500
    assert_eq!(body["aqi"], 500);
    assert_eq!(body["quality"], "Hazardous");
}

#[tokio::test]
async fn calculate_quality_follows_rounded_aqi() {
    let server = create_test_server();
    // o3 33.6 * 1.5 = 50.4, rounds down to 50; the reported category
    // matches the rounded value the client sees
    let response = server
        .post("/api/calculate-aqi")
        .json(&json!({"o3": 33.6}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["aqi"], 50);
    assert_eq!(body["quality"], "Good");
}

#[tokio::test]
async fn calculate_empty_body_defaults_to_zero() {
    let server = create_test_server();
    let response = server.post("/api/calculate-aqi").json(&json!({})).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["aqi"], 0);
    assert_eq!(body["quality"], "Good");
}

#[tokio::test]
async fn calculate_rejects_non_numeric_values() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate-aqi")
        .json(&json!({"pm25": "abc"}))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid pollutant values provided");
}

// ============================================================================
// Prediction and advice
// ============================================================================

#[tokio::test]
async fn predict_unknown_city_is_bad_request() {
    let server = create_test_server();
    let response = server
        .post("/api/predict-aqi")
        .json(&json!({"city": "Gotham", "age": 30}))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "City not supported");
}

#[tokio::test]
async fn predict_child_advice_at_severe_aqi() {
    let server = create_test_server_with_aqi(220);
    let response = server
        .post("/api/predict-aqi")
        .json(&json!({"name": "Asha", "city": "Delhi", "age": 10}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["city"], "Delhi");
    assert_eq!(body["aqi"], 220);
    assert_eq!(
        body["advice"],
        "Dangerous for children. Avoid outdoor activities."
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn predict_accepts_numeric_string_age() {
    let server = create_test_server_with_aqi(220);
    let response = server
        .post("/api/predict-aqi")
        .json(&json!({"city": "Delhi", "age": "10"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["advice"],
        "Dangerous for children. Avoid outdoor activities."
    );
}

#[tokio::test]
async fn predict_rejects_non_numeric_age() {
    let server = create_test_server();
    let response = server
        .post("/api/predict-aqi")
        .json(&json!({"city": "Delhi", "age": "ten"}))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid age provided");
}

#[tokio::test]
async fn predict_safe_advice_at_low_aqi() {
    let server = create_test_server_with_aqi(40);
    let response = server
        .post("/api/predict-aqi")
        .json(&json!({"city": "Pune", "age": 30}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["advice"], "Air quality is safe. Enjoy your day!");
    assert_eq!(body["quality"], "Good");
}

// ============================================================================
// Chatbot
// ============================================================================

#[tokio::test]
async fn chatbot_returns_reply_and_timestamp() {
    let server = create_test_server();
    let response = server
        .post("/api/chatbot")
        .json(&json!({"message": "What is AQI?"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["response"], "AQI measures air pollution severity.");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn chatbot_rejects_empty_message() {
    let server = create_test_server();

    let response = server.post("/api/chatbot").json(&json!({"message": ""})).await;
    response.assert_status_bad_request();

    let response = server.post("/api/chatbot").json(&json!({})).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn chatbot_masks_inference_failure_with_fallback() {
    let state = build_state(
        Arc::new(StubProvider { aqi: 100 }),
        Arc::new(StubInference { reply: None }),
    );
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server
        .post("/api/chatbot")
        .json(&json!({"message": "Hello"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["response"],
        "Sorry, I am currently unavailable. Please try again later."
    );
}
