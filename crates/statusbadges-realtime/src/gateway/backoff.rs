//! Reconnect delay policy.

use std::time::Duration;

use statusbadges_core::config::ReconnectConfig;

/// Exponential backoff with symmetric jitter.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// First retry delay in milliseconds.
    pub base_ms: u64,
    /// Growth per consecutive failure.
    pub factor: f64,
    /// Relative jitter, `0.2` = ±20%.
    pub jitter: f64,
    /// Ceiling in milliseconds.
    pub cap_ms: u64,
}

impl From<&ReconnectConfig> for RetryPolicy {
    fn from(config: &ReconnectConfig) -> Self {
        Self {
            base_ms: config.base_ms,
            factor: config.factor,
            jitter: config.jitter.clamp(0.0, 0.99),
            cap_ms: config.cap_ms,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&ReconnectConfig::default())
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt`; zero failures means no wait.
    pub fn delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let exp = (attempt - 1).min(32) as i32;
        let mut delay = (self.base_ms as f64) * self.factor.powi(exp);
        if delay > self.cap_ms as f64 {
            delay = self.cap_ms as f64;
        }
        if self.jitter > 0.0 {
            let spread = rand::random::<f64>() * 2.0 - 1.0;
            delay *= 1.0 + spread * self.jitter;
        }
        Duration::from_millis(delay.max(0.0).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_jitter() -> RetryPolicy {
        RetryPolicy {
            base_ms: 100,
            factor: 2.0,
            jitter: 0.0,
            cap_ms: 1_000,
        }
    }

    #[test]
    fn test_zero_attempts_is_immediate() {
        assert_eq!(no_jitter().delay(0), Duration::ZERO);
    }

    #[test]
    fn test_exponential_growth_and_cap() {
        let policy = no_jitter();
        assert_eq!(policy.delay(1), Duration::from_millis(100));
        assert_eq!(policy.delay(2), Duration::from_millis(200));
        assert_eq!(policy.delay(4), Duration::from_millis(800));
        assert_eq!(policy.delay(5), Duration::from_millis(1_000));
        assert_eq!(policy.delay(500), Duration::from_millis(1_000));
    }

    #[test]
    fn test_jitter_stays_in_band() {
        let policy = RetryPolicy {
            jitter: 0.2,
            ..no_jitter()
        };
        for _ in 0..100 {
            let ms = policy.delay(3).as_millis();
            assert!((320..=480).contains(&ms), "{ms} outside ±20% of 400");
        }
    }
}
