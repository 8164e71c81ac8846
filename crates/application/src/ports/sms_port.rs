//! SMS notification port

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for sending severe-air-quality alerts
#[async_trait]
pub trait SmsPort: Send + Sync {
    /// Send a severe-AQI alert to a phone number
    async fn send_alert(&self, phone: &str, aqi: i32, advice: &str)
    -> Result<(), ApplicationError>;
}
