//! Hosted text-generation inference
//!
//! Client for a hosted text-generation endpoint (Hugging Face Inference API
//! format): prompt in, generated completion out, bearer-token authenticated.

pub mod client;
pub mod config;
pub mod error;
pub mod ports;

pub use client::HfInferenceClient;
pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ports::TextGeneration;
