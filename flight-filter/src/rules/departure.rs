//! Rejects flights with a segment departing before a reference time.

use std::fmt;

use chrono::{Local, NaiveDateTime};

use super::FilterRule;
use crate::domain::{Flight, TIMESTAMP_FORMAT};

/// Passes a flight iff no segment departs before the reference time.
///
/// A departure exactly at the reference time passes. The reference time is
/// fixed when the rule is built; use [`DepartureBeforeCurrentTimeFilter::at`]
/// for reproducible results.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::{Flight, Segment};
/// use flight_filter::rules::{DepartureBeforeCurrentTimeFilter, FilterRule};
/// use chrono::{Duration, NaiveDate};
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let rule = DepartureBeforeCurrentTimeFilter::at(now);
///
/// let earlier = Flight::new(vec![Segment::new(now - Duration::hours(1), now + Duration::hours(1))]);
/// let later = Flight::new(vec![Segment::new(now + Duration::hours(1), now + Duration::hours(3))]);
///
/// assert!(!rule.evaluate(&earlier));
/// assert!(rule.evaluate(&later));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureBeforeCurrentTimeFilter {
    reference_time: NaiveDateTime,
}

impl DepartureBeforeCurrentTimeFilter {
    /// Create the rule with an explicit reference time.
    pub fn at(reference_time: NaiveDateTime) -> Self {
        Self { reference_time }
    }

    /// Create the rule using the local wall clock as the reference time.
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Returns the reference time.
    pub fn reference_time(&self) -> NaiveDateTime {
        self.reference_time
    }
}

impl FilterRule for DepartureBeforeCurrentTimeFilter {
    fn evaluate(&self, flight: &Flight) -> bool {
        !flight.has_departure_in_past(self.reference_time)
    }

    fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DepartureBeforeCurrentTimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "departure_not_before({})",
            self.reference_time.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::*;

    #[test]
    fn rejects_past_departure() {
        let rule = DepartureBeforeCurrentTimeFilter::at(t0());
        assert!(!rule.evaluate(&flight(&[(-1, 1)])));
    }

    #[test]
    fn passes_future_departure() {
        let rule = DepartureBeforeCurrentTimeFilter::at(t0());
        assert!(rule.evaluate(&flight(&[(1, 3)])));
    }

    #[test]
    fn departure_at_reference_passes() {
        let rule = DepartureBeforeCurrentTimeFilter::at(t0());
        assert!(rule.evaluate(&flight(&[(0, 2)])));
    }

    #[test]
    fn any_past_segment_rejects() {
        // Later segment somehow departs before the reference
        let rule = DepartureBeforeCurrentTimeFilter::at(t0());
        assert!(!rule.evaluate(&flight(&[(1, 2), (-2, -1)])));
    }

    #[test]
    fn now_captures_wall_clock() {
        let before = Local::now().naive_local();
        let rule = DepartureBeforeCurrentTimeFilter::now();
        let after = Local::now().naive_local();

        assert!(rule.reference_time() >= before);
        assert!(rule.reference_time() <= after);
    }

    #[test]
    fn description_exposes_reference_time() {
        let rule = DepartureBeforeCurrentTimeFilter::at(t0());
        assert_eq!(rule.description(), "departure_not_before(2024-03-15T08:00)");
    }
}
