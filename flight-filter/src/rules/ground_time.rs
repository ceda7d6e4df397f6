//! Rejects flights that spend too long on the ground between segments.

use std::fmt;

use chrono::Duration;

use super::FilterRule;
use crate::domain::{DomainError, Flight};

/// Ground time allowed by [`ExcessiveGroundTimeFilter::default`] (minutes).
pub const DEFAULT_MAX_GROUND_TIME_MINUTES: u32 = 120;

/// Passes a flight iff its total ground time is within a threshold.
///
/// Direct flights always pass.
///
/// # Examples
///
/// ```
/// use flight_filter::rules::ExcessiveGroundTimeFilter;
/// use chrono::Duration;
///
/// let rule = ExcessiveGroundTimeFilter::new(60).unwrap();
/// assert_eq!(rule.max_ground_time_minutes(), 60);
///
/// // Durations truncate to whole minutes
/// let rule = ExcessiveGroundTimeFilter::from_duration(Duration::seconds(150)).unwrap();
/// assert_eq!(rule.max_ground_time_minutes(), 2);
///
/// assert!(ExcessiveGroundTimeFilter::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcessiveGroundTimeFilter {
    max_ground_time_minutes: i64,
}

impl ExcessiveGroundTimeFilter {
    /// Create the rule with a threshold in minutes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the threshold is negative.
    pub fn new(max_ground_time_minutes: i64) -> Result<Self, DomainError> {
        if max_ground_time_minutes < 0 {
            return Err(DomainError::NegativeGroundTime(max_ground_time_minutes));
        }
        Ok(Self {
            max_ground_time_minutes,
        })
    }

    /// Create the rule from an unsigned threshold, which cannot fail.
    pub const fn minutes(max_ground_time_minutes: u32) -> Self {
        Self {
            max_ground_time_minutes: max_ground_time_minutes as i64,
        }
    }

    /// Create the rule with a threshold given as a duration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the duration is shorter than zero whole minutes.
    pub fn from_duration(max_ground_time: Duration) -> Result<Self, DomainError> {
        Self::new(max_ground_time.num_minutes())
    }

    /// Returns the threshold in minutes.
    pub fn max_ground_time_minutes(&self) -> i64 {
        self.max_ground_time_minutes
    }
}

impl Default for ExcessiveGroundTimeFilter {
    fn default() -> Self {
        Self::minutes(DEFAULT_MAX_GROUND_TIME_MINUTES)
    }
}

impl FilterRule for ExcessiveGroundTimeFilter {
    fn evaluate(&self, flight: &Flight) -> bool {
        flight.is_direct() || flight.total_ground_time_minutes() <= self.max_ground_time_minutes
    }

    fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExcessiveGroundTimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ground_time_at_most({}m)", self.max_ground_time_minutes)
    }
}
