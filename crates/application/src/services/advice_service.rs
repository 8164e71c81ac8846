//! Health advice rule and optional SMS alerting

use std::{fmt, sync::Arc};

use tracing::{info, warn};

use crate::ports::SmsPort;

/// AQI threshold above which an SMS alert is attempted
const SMS_ALERT_THRESHOLD: i32 = 180;

/// Service evaluating the ordered health-advice rule list
pub struct AdviceService {
    sms: Arc<dyn SmsPort>,
}

impl fmt::Debug for AdviceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdviceService").finish_non_exhaustive()
    }
}

impl AdviceService {
    /// Create a new advice service over an SMS port
    pub fn new(sms: Arc<dyn SmsPort>) -> Self {
        Self { sms }
    }

    /// Evaluate the advice rules for an AQI and age; first match wins.
    #[must_use]
    pub fn advise(aqi: i32, age: i64) -> &'static str {
        if aqi >= 200 && age <= 12 {
            "Dangerous for children. Avoid outdoor activities."
        } else if aqi >= 180 && age >= 60 {
            "Harmful for elderly people. Stay indoors."
        } else if aqi >= 150 {
            "Unhealthy air quality. Use masks outdoors."
        } else if aqi >= 100 {
            "Moderate pollution. Limit prolonged exposure."
        } else {
            "Air quality is safe. Enjoy your day!"
        }
    }

    /// Attempt an SMS alert for severe air quality.
    ///
    /// Only fires when the AQI reaches the alert threshold and a phone
    /// number was supplied. Delivery failures are swallowed and logged;
    /// they never affect the caller's response.
    pub async fn notify_if_severe(&self, aqi: i32, phone: Option<&str>, advice: &str) {
        let Some(phone) = phone.filter(|p| !p.is_empty()) else {
            return;
        };
        if aqi < SMS_ALERT_THRESHOLD {
            return;
        }

        match self.sms.send_alert(phone, aqi, advice).await {
            Ok(()) => info!(aqi, "SMS alert sent"),
            Err(e) => warn!(aqi, error = %e, "SMS alert failed"),
        }
    }
}
