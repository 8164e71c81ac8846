//! Application state shared across handlers

use std::sync::Arc;

use application::ports::RandomSource;
use application::{AdviceService, AirQualityService, ChatService, SeriesGenerator};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Air-quality readings with guaranteed fallback
    pub air_quality: Arc<AirQualityService>,
    /// Forecast and intraday series synthesis
    pub series: Arc<SeriesGenerator>,
    /// Health advice and SMS alerting
    pub advice: Arc<AdviceService>,
    /// Chat relay to the LLM backend
    pub chat: Arc<ChatService>,
    /// Random source for simulated weather fields
    pub rng: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
