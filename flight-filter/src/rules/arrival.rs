//! Rejects flights containing a segment that lands before it takes off.

use std::fmt;

use super::FilterRule;
use crate::domain::Flight;

/// Passes a flight iff every segment arrives no earlier than it departs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrivalBeforeDepartureFilter;

impl ArrivalBeforeDepartureFilter {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl FilterRule for ArrivalBeforeDepartureFilter {
    fn evaluate(&self, flight: &Flight) -> bool {
        !flight.has_invalid_segments()
    }

    fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArrivalBeforeDepartureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arrival_not_before_departure")
    }
}
