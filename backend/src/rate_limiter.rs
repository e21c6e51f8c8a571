use std::collections::HashMap;
use std::sync::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::{error, warn};
use shared::error::ErrorResponse;

#[derive(Debug)]
struct Window {
    attempts: u32,
    started: OffsetDateTime,
}

/// In-memory flood limiter keyed by request fingerprint. This only slows
/// down scripted insert floods; the real per-category vote caps live in the
/// device's local rate-limit record.
#[derive(Debug)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
    max_attempts: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: u32, window_minutes: i64) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_attempts,
            window: Duration::minutes(window_minutes),
        }
    }

    pub fn check(&self, key: &str) -> Result<(), ErrorResponse> {
        let now = OffsetDateTime::now_utc();

        let mut windows = match self.windows.lock() {
            Ok(guard) => guard,
            Err(e) => {
                error!("Failed to acquire rate limit lock: {}", e);
                return Err(ErrorResponse { error: "Internal rate limit error".into() });
            }
        };

        windows.retain(|_, w| now - w.started <= self.window * 2);

        match windows.get_mut(key) {
            Some(w) if now - w.started <= self.window => {
                if w.attempts >= self.max_attempts {
                    let seconds_to_wait = (w.started + self.window - now).whole_seconds().max(1);
                    warn!("Rate limit triggered for key {}", key);
                    return Err(ErrorResponse {
                        error: format!(
                            "You're voting too quickly. Please try again in {} seconds.",
                            seconds_to_wait
                        ),
                    });
                }
                w.attempts += 1;
                Ok(())
            }
            Some(w) => {
                *w = Window { attempts: 1, started: now };
                Ok(())
            }
            None => {
                windows.insert(key.to_string(), Window { attempts: 1, started: now });
                Ok(())
            }
        }
    }
}
