//! Pool configuration.

use std::time::Duration;

use crate::error::PoolError;

/// Interval used by the scheduled reset when none is given: 24 hours.
pub const DEFAULT_RESET_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Whether the pool clears its usage counters on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoReset {
    /// Counters are only cleared by an explicit [`reset`](crate::TokenPool::reset).
    #[default]
    Disabled,
    /// Counters are cleared every interval. A manual reset restarts the interval.
    Every(Duration),
}

impl AutoReset {
    /// Auto reset on the default daily interval.
    pub fn daily() -> Self {
        AutoReset::Every(DEFAULT_RESET_INTERVAL)
    }

    pub fn interval(&self) -> Option<Duration> {
        match self {
            AutoReset::Disabled => None,
            AutoReset::Every(interval) => Some(*interval),
        }
    }
}

/// Settings used to build a [`TokenPool`](crate::TokenPool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of tokens in the pool. Must be at least 1.
    pub token_count: usize,
    /// Scheduled reset mode.
    pub auto_reset: AutoReset,
}

impl PoolConfig {
    /// A pool of `token_count` tokens without scheduled reset.
    pub fn new(token_count: usize) -> Self {
        Self {
            token_count,
            auto_reset: AutoReset::Disabled,
        }
    }

    pub fn with_auto_reset(mut self, auto_reset: AutoReset) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    /// Checks the settings that do not depend on the environment.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.token_count == 0 {
            return Err(PoolError::InvalidConfiguration(
                "token count must be at least 1".to_string(),
            ));
        }
        if let AutoReset::Every(interval) = self.auto_reset {
            if interval.is_zero() {
                return Err(PoolError::InvalidConfiguration(
                    "auto reset interval must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = PoolConfig::new(3);
        assert_eq!(config.auto_reset, AutoReset::Disabled);
        assert_eq!(config.auto_reset.interval(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_daily_interval() {
        assert_eq!(
            AutoReset::daily().interval(),
            Some(Duration::from_secs(86_400))
        );
    }

    #[test]
    fn test_rejects_zero_tokens() {
        let err = PoolConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = PoolConfig::new(2).with_auto_reset(AutoReset::Every(Duration::ZERO));
        assert!(config.validate().is_err());
    }
}
