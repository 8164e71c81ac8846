//! Inference adapter - implements InferencePort using ai_core

use ai_core::{HfInferenceClient, InferenceConfig, InferenceError, TextGeneration};
use application::error::ApplicationError;
use application::ports::InferencePort;
use async_trait::async_trait;

/// Adapter for the hosted text-generation endpoint
pub struct HfInferenceAdapter {
    client: HfInferenceClient,
}

impl std::fmt::Debug for HfInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfInferenceAdapter")
            .field("client", &"HfInferenceClient")
            .finish()
    }
}

impl HfInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let client = HfInferenceClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: InferenceError) -> ApplicationError {
        ApplicationError::Inference(err.to_string())
    }
}

#[async_trait]
impl InferencePort for HfInferenceAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError> {
        self.client.generate(prompt).await.map_err(Self::map_error)
    }
}
