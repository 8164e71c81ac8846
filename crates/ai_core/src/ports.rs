//! Port definitions for text generation
//!
//! Defines the trait that inference adapters must implement.

use async_trait::async_trait;

use crate::error::InferenceError;

/// Port for text-generation implementations
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}
