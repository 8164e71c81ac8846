//! Inference port - interface for LLM text generation

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for prompt-completion text generation
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a completion for a fully assembled prompt
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError>;
}
