//! Application ports - interfaces to the outside world

mod air_quality_port;
mod inference_port;
mod random_port;
mod sms_port;

pub use air_quality_port::AirQualityPort;
pub use inference_port::InferencePort;
pub use random_port::RandomSource;
pub use sms_port::SmsPort;
