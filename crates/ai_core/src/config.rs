//! Configuration for inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the hosted text-generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Full URL of the hosted model endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the inference API
    #[serde(default)]
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_api_url() -> String {
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_new_tokens() -> u32 {
    200
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            timeout_secs: default_timeout_secs(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
        }
    }
}
