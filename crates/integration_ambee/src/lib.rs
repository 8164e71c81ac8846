//! Ambee air-quality integration
//!
//! Client for the Ambee Air Quality API (<https://www.getambee.com>).
//! Provides the latest station reading for a pair of coordinates,
//! authenticated with an `x-api-key` header.

pub mod client;
mod models;

pub use client::{AirQualityClient, AmbeeClient, AmbeeConfig, AmbeeError};
pub use models::{LatestReading, LatestResponse, Station};
