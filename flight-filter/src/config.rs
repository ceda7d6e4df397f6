//! Filtering configuration.

use chrono::Duration;

use crate::rules::DEFAULT_MAX_GROUND_TIME_MINUTES;
use crate::rules::presets::BUSINESS_MAX_GROUND_TIME_MINUTES;

/// Thresholds used when building rules from presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Maximum total ground time for the standard rule set (minutes).
    pub max_ground_time_mins: i64,

    /// Maximum total ground time for the business rule set (minutes).
    pub business_max_ground_time_mins: i64,

    /// How far ahead of now the sample flights are scheduled (days).
    pub sample_offset_days: i64,
}

impl FilterConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_ground_time_mins: i64,
        business_max_ground_time_mins: i64,
        sample_offset_days: i64,
    ) -> Self {
        Self {
            max_ground_time_mins,
            business_max_ground_time_mins,
            sample_offset_days,
        }
    }

    /// Returns the standard ground time limit as a Duration.
    pub fn max_ground_time(&self) -> Duration {
        Duration::minutes(self.max_ground_time_mins)
    }

    /// Returns the business ground time limit as a Duration.
    pub fn business_max_ground_time(&self) -> Duration {
        Duration::minutes(self.business_max_ground_time_mins)
    }

    /// Returns the sample schedule offset as a Duration.
    pub fn sample_offset(&self) -> Duration {
        Duration::days(self.sample_offset_days)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_ground_time_mins: DEFAULT_MAX_GROUND_TIME_MINUTES.into(), // 2 hours
            business_max_ground_time_mins: BUSINESS_MAX_GROUND_TIME_MINUTES.into(), // 1 hour
            sample_offset_days: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FilterConfig::default();

        assert_eq!(config.max_ground_time_mins, 120);
        assert_eq!(config.business_max_ground_time_mins, 60);
        assert_eq!(config.sample_offset_days, 3);
    }

    #[test]
    fn duration_methods() {
        let config = FilterConfig::default();

        assert_eq!(config.max_ground_time(), Duration::minutes(120));
        assert_eq!(config.business_max_ground_time(), Duration::minutes(60));
        assert_eq!(config.sample_offset(), Duration::days(3));
    }

    #[test]
    fn custom_config() {
        let config = FilterConfig::new(90, 30, 7);

        assert_eq!(config.max_ground_time_mins, 90);
        assert_eq!(config.business_max_ground_time_mins, 30);
        assert_eq!(config.sample_offset_days, 7);
    }
}
