//! Chat relay service
//!
//! Wraps user messages in a fixed air-quality-assistant instruction and
//! relays them to the inference port. Downstream failures are masked by a
//! canned fallback reply; only empty input is rejected.

use std::{fmt, sync::Arc};

use domain::DomainError;
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::InferencePort};

/// Fixed instruction framing every relayed message
const SYSTEM_INSTRUCTION: &str = "You are an AI assistant specialized in air quality and \
environmental health. Answer questions about AQI (Air Quality Index), pollution, health \
effects, and environmental protection. Keep responses concise and helpful.";

/// Reply returned whenever the inference backend fails
const FALLBACK_REPLY: &str = "Sorry, I am currently unavailable. Please try again later.";

/// Service relaying chat messages to the LLM backend
pub struct ChatService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService").finish_non_exhaustive()
    }
}

impl ChatService {
    /// Create a new chat service over an inference port
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Relay a user message and return the assistant reply.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty/whitespace input. Inference
    /// failures do not error; they yield the fixed fallback reply.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn ask(&self, message: &str) -> Result<String, ApplicationError> {
        if message.trim().is_empty() {
            return Err(DomainError::ValidationError("No message provided".to_string()).into());
        }

        let prompt = format!(
            "{SYSTEM_INSTRUCTION}\n\nUser question: {message}\n\nAssistant:"
        );

        match self.inference.generate(&prompt).await {
            Ok(reply) => {
                debug!(reply_len = reply.len(), "Chat reply generated");
                Ok(reply.trim().to_string())
            },
            Err(e) => {
                warn!(error = %e, "Inference failed, returning fallback reply");
                Ok(FALLBACK_REPLY.to_string())
            },
        }
    }
}
