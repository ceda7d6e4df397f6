//! Applies filter rules to collections of flights.

use tracing::{debug, trace};

use crate::domain::Flight;
use crate::rules::FilterRule;

/// Selects the flights that satisfy a rule.
///
/// Filtering never reorders or mutates its input.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::{Flight, Segment};
/// use flight_filter::engine::FlightFilter;
/// use flight_filter::rules::ArrivalBeforeDepartureFilter;
/// use chrono::{Duration, NaiveDate};
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let ok = Flight::new(vec![Segment::new(t, t + Duration::hours(2))]);
/// let inverted = Flight::new(vec![Segment::new(t, t - Duration::hours(6))]);
///
/// let kept = FlightFilter::new().filter(&[ok.clone(), inverted], &ArrivalBeforeDepartureFilter);
/// assert_eq!(kept, vec![ok]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightFilter;

impl FlightFilter {
    /// Create a filter engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns the flights for which `rule` is true, in input order.
    pub fn filter<R: FilterRule + ?Sized>(&self, flights: &[Flight], rule: &R) -> Vec<Flight> {
        let kept: Vec<Flight> = flights
            .iter()
            .filter(|flight| {
                let pass = rule.evaluate(flight);
                if !pass {
                    trace!(flight = %flight, "Flight rejected");
                }
                pass
            })
            .cloned()
            .collect();

        debug!(
            rule = %rule.description(),
            input = flights.len(),
            kept = kept.len(),
            "Filtered flights"
        );

        kept
    }

    /// Returns the flights for which every rule is true, in input order.
    ///
    /// Rules are chained left to right with [`FilterRule::and`], so a flight
    /// stops being checked at its first failing rule. With no rules the input
    /// is returned unchanged.
    pub fn filter_all(&self, flights: &[Flight], rules: &[&dyn FilterRule]) -> Vec<Flight> {
        let Some((first, rest)) = rules.split_first() else {
            return flights.to_vec();
        };

        let mut combined: Box<dyn FilterRule + '_> = Box::new(*first);
        for rule in rest {
            combined = Box::new(combined.and(*rule));
        }

        self.filter(flights, &combined)
    }

    /// Returns the verdict of `rule` for each flight, in input order.
    pub fn verdicts<R: FilterRule + ?Sized>(&self, flights: &[Flight], rule: &R) -> Vec<bool> {
        flights.iter().map(|flight| rule.evaluate(flight)).collect()
    }
}
