//! Domain entities

mod reading;
mod series;

pub use reading::{AqiReading, DataSource, Pollutants};
pub use series::{ForecastDay, HourlyPoint};
