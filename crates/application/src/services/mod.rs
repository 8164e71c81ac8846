//! Application services

mod advice_service;
mod air_quality_service;
mod chat_service;
mod series_generator;

pub use advice_service::AdviceService;
pub use air_quality_service::AirQualityService;
pub use chat_service::ChatService;
pub use series_generator::SeriesGenerator;
