//! Application layer - use cases and orchestration
//!
//! Defines the ports the outside world plugs into and the services that
//! orchestrate domain logic: provider fetch with guaranteed fallback,
//! synthetic series generation, health advice, and the chat relay.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
