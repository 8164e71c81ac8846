//! SMS adapter - log-only stand-in for a real SMS gateway
//!
//! No gateway is wired yet; alerts are recorded in the log so the
//! notification path stays exercised end to end.

use application::error::ApplicationError;
use application::ports::SmsPort;
use async_trait::async_trait;
use tracing::info;

/// SMS adapter that logs alerts instead of sending them
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlySmsAdapter;

impl LogOnlySmsAdapter {
    /// Create a new log-only adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsPort for LogOnlySmsAdapter {
    async fn send_alert(
        &self,
        phone: &str,
        aqi: i32,
        advice: &str,
    ) -> Result<(), ApplicationError> {
        info!(phone = %phone, aqi, advice = %advice, "SMS alert (not sent, logging only)");
        Ok(())
    }
}
