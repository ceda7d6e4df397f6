//! Sample flights for demonstrations and tests.
//!
//! The set covers each case the built-in rules care about: a direct
//! flight, acceptable and excessive connections, a departure in the past
//! and a segment that lands before it takes off.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{Flight, Segment};

/// Builds the sample flights, scheduled relative to `start`.
///
/// In order:
/// 1. A normal two-hour direct flight.
/// 2. Two segments with one hour on the ground.
/// 3. A flight departing six days before `start`.
/// 4. A flight arriving six hours before it departs.
/// 5. Two segments with three hours on the ground.
/// 6. Three segments with three hours on the ground in total.
pub fn sample_flights_from(start: NaiveDateTime) -> Vec<Flight> {
    let h = |hours| start + Duration::hours(hours);

    vec![
        flight(&[(h(0), h(2))]),
        flight(&[(h(0), h(2)), (h(3), h(5))]),
        flight(&[(start - Duration::days(6), h(0))]),
        flight(&[(h(0), h(-6))]),
        flight(&[(h(0), h(2)), (h(5), h(6))]),
        flight(&[(h(0), h(2)), (h(3), h(4)), (h(6), h(7))]),
    ]
}

/// Builds the sample flights, scheduled `offset` after `now`.
pub fn sample_flights(now: NaiveDateTime, offset: Duration) -> Vec<Flight> {
    sample_flights_from(now + offset)
}

fn flight(legs: &[(NaiveDateTime, NaiveDateTime)]) -> Flight {
    Flight::new(
        legs.iter()
            .map(|&(departure, arrival)| Segment::new(departure, arrival))
            .collect(),
    )
}
