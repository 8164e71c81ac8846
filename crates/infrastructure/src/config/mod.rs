//! Application configuration
//!
//! Split into focused sections:
//! - `server`: HTTP server settings
//! - `ambee`: air-quality provider credentials and endpoint
//! - `inference`: hosted text-generation endpoint

mod server;

use ai_core::InferenceConfig;
use integration_ambee::AmbeeConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Ambee air-quality provider configuration
    #[serde(default)]
    pub ambee: AmbeeConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Reads `aerosense.toml` if present, then applies environment variables
    /// with the `AEROSENSE_` prefix (e.g. `AEROSENSE_AMBEE_API_KEY`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .add_source(config::File::with_name("aerosense").required(false))
            .add_source(
                config::Environment::with_prefix("AEROSENSE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
