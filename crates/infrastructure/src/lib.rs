//! Infrastructure layer - configuration and port adapters
//!
//! Concrete implementations of the application ports (Ambee provider,
//! hosted inference, SMS stub, thread-local randomness) plus layered
//! configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::{AmbeeAdapter, HfInferenceAdapter, LogOnlySmsAdapter, ThreadRandom};
pub use config::{AppConfig, ServerConfig};
