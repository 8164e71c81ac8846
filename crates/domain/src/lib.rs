//! Domain layer for AeroSense
//!
//! Contains the city registry, AQI categorization and breakpoint math,
//! reading/series entities, and domain errors. This layer performs no I/O.

pub mod aqi;
pub mod city;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use aqi::{AqiCategory, aqi_from_pollutants};
pub use city::{City, CityRegistry};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
