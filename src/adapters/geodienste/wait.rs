//! Wait strategy between retry attempts
//!
//! The service's guidance is a flat retry interval, not exponential backoff.
//! The strategy is injected into the client so tests can drive the retry
//! loops to completion without sleeping.

use std::time::Duration;

/// Production default between retry attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(60);

/// Supplies the fixed delay to sleep between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitStrategy {
    interval: Duration,
}

impl WaitStrategy {
    /// A strategy with a fixed interval.
    pub const fn fixed(interval: Duration) -> Self {
        Self { interval }
    }

    /// A strategy that does not wait at all. Intended for tests.
    pub const fn none() -> Self {
        Self {
            interval: Duration::ZERO,
        }
    }

    /// The delay to wait before the next attempt.
    pub fn delay(&self) -> Duration {
        self.interval
    }
}

impl Default for WaitStrategy {
    fn default() -> Self {
        Self::fixed(DEFAULT_RETRY_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_minute() {
        assert_eq!(WaitStrategy::default().delay(), Duration::from_secs(60));
    }

    #[test]
    fn test_none_does_not_wait() {
        assert_eq!(WaitStrategy::none().delay(), Duration::ZERO);
    }

    #[test]
    fn test_fixed_interval_is_kept() {
        let strategy = WaitStrategy::fixed(Duration::from_millis(250));
        assert_eq!(strategy.delay(), Duration::from_millis(250));
    }
}
