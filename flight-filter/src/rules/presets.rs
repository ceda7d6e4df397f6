//! Preset rule combinations.
//!
//! Every preset checks that no segment departs before the reference time and
//! that no segment is inverted; the presets differ in the ground time they
//! allow. Functions without an `_at` suffix use the local wall clock as the
//! reference time.

use chrono::{Duration, Local, NaiveDateTime};

use super::{
    AllRules, And, AnyRules, ArrivalBeforeDepartureFilter, BoxedRule,
    DepartureBeforeCurrentTimeFilter, ExcessiveGroundTimeFilter,
};
use crate::domain::DomainError;

/// Ground time allowed by the business preset (minutes).
pub const BUSINESS_MAX_GROUND_TIME_MINUTES: u32 = 60;

/// Departure and arrival checks without a ground-time limit.
pub type BasicRule = And<DepartureBeforeCurrentTimeFilter, ArrivalBeforeDepartureFilter>;

/// Basic checks plus a ground-time limit.
pub type GroundTimeRule = And<BasicRule, ExcessiveGroundTimeFilter>;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn with_ground_limit(reference: NaiveDateTime, limit: ExcessiveGroundTimeFilter) -> GroundTimeRule {
    And::new(basic_at(reference), limit)
}

/// Basic checks with a two-hour ground-time limit, relative to now.
pub fn standard() -> GroundTimeRule {
    standard_at(now())
}

/// Basic checks with a two-hour ground-time limit.
pub fn standard_at(reference: NaiveDateTime) -> GroundTimeRule {
    with_ground_limit(reference, ExcessiveGroundTimeFilter::default())
}

/// Basic checks with a one-hour ground-time limit, relative to now.
pub fn business() -> GroundTimeRule {
    business_at(now())
}

/// Basic checks with a one-hour ground-time limit.
pub fn business_at(reference: NaiveDateTime) -> GroundTimeRule {
    with_ground_limit(
        reference,
        ExcessiveGroundTimeFilter::minutes(BUSINESS_MAX_GROUND_TIME_MINUTES),
    )
}

/// Departure and arrival checks only, relative to now.
pub fn basic() -> BasicRule {
    basic_at(now())
}

/// Departure and arrival checks only.
pub fn basic_at(reference: NaiveDateTime) -> BasicRule {
    And::new(
        DepartureBeforeCurrentTimeFilter::at(reference),
        ArrivalBeforeDepartureFilter,
    )
}

/// Basic checks with a caller-supplied ground-time limit, relative to now.
///
/// # Errors
///
/// Returns `Err` if `max_ground_time_minutes` is negative.
pub fn custom(max_ground_time_minutes: i64) -> Result<GroundTimeRule, DomainError> {
    custom_at(now(), max_ground_time_minutes)
}

/// Basic checks with a caller-supplied ground-time limit.
///
/// # Errors
///
/// Returns `Err` if `max_ground_time_minutes` is negative.
pub fn custom_at(
    reference: NaiveDateTime,
    max_ground_time_minutes: i64,
) -> Result<GroundTimeRule, DomainError> {
    let limit = ExcessiveGroundTimeFilter::new(max_ground_time_minutes)?;
    Ok(with_ground_limit(reference, limit))
}

/// Like [`custom`], with the limit given as a duration (truncated to minutes).
///
/// # Errors
///
/// Returns `Err` if the duration is negative.
pub fn custom_duration(max_ground_time: Duration) -> Result<GroundTimeRule, DomainError> {
    custom_duration_at(now(), max_ground_time)
}

/// Like [`custom_at`], with the limit given as a duration (truncated to minutes).
///
/// # Errors
///
/// Returns `Err` if the duration is negative.
pub fn custom_duration_at(
    reference: NaiveDateTime,
    max_ground_time: Duration,
) -> Result<GroundTimeRule, DomainError> {
    let limit = ExcessiveGroundTimeFilter::from_duration(max_ground_time)?;
    Ok(with_ground_limit(reference, limit))
}

/// Conjunction over `rules` in list order. An empty list passes every flight.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::Flight;
/// use flight_filter::rules::{presets, FilterRule};
///
/// let everything = presets::combine(vec![]);
/// let nothing = presets::combine_or(vec![]);
///
/// let flight = Flight::new(vec![]);
/// assert!(everything.evaluate(&flight));
/// assert!(!nothing.evaluate(&flight));
/// ```
pub fn combine(rules: Vec<BoxedRule>) -> AllRules {
    AllRules::new(rules)
}

/// Disjunction over `rules` in list order. An empty list rejects every flight.
pub fn combine_or(rules: Vec<BoxedRule>) -> AnyRules {
    AnyRules::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Flight, Segment};
    use crate::rules::FilterRule;
    use crate::rules::test_support::*;

    fn at(minutes: i64) -> NaiveDateTime {
        t0() + Duration::minutes(minutes)
    }

    /// Future two-segment flight with the given ground time.
    fn connecting(ground_minutes: i64) -> Flight {
        Flight::new(vec![
            Segment::new(at(60), at(120)),
            Segment::new(at(120 + ground_minutes), at(180 + ground_minutes)),
        ])
    }

    #[test]
    fn business_limits_ground_time_to_an_hour() {
        let rule = business_at(t0());

        assert!(!rule.evaluate(&connecting(180)));
        assert!(rule.evaluate(&connecting(30)));
        assert!(rule.evaluate(&connecting(60)));
        assert!(!rule.evaluate(&connecting(61)));
    }

    #[test]
    fn standard_limits_ground_time_to_two_hours() {
        let rule = standard_at(t0());

        assert!(rule.evaluate(&connecting(120)));
        assert!(!rule.evaluate(&connecting(121)));
    }

    #[test]
    fn basic_ignores_ground_time() {
        let rule = basic_at(t0());
        assert!(rule.evaluate(&connecting(24 * 60)));
    }

    #[test]
    fn presets_reject_past_and_inverted() {
        let past = flight(&[(-1, 1)]);
        let inverted = flight(&[(2, 1)]);

        for rule in [
            standard_at(t0()).boxed(),
            business_at(t0()).boxed(),
            basic_at(t0()).boxed(),
            custom_at(t0(), 600).unwrap().boxed(),
        ] {
            assert!(!rule.evaluate(&past), "{}", rule.description());
            assert!(!rule.evaluate(&inverted), "{}", rule.description());
        }
    }

    #[test]
    fn custom_uses_given_threshold() {
        let rule = custom_at(t0(), 90).unwrap();
        assert!(rule.evaluate(&connecting(90)));
        assert!(!rule.evaluate(&connecting(91)));

        let rule = custom_duration_at(t0(), Duration::minutes(45)).unwrap();
        assert!(rule.evaluate(&connecting(45)));
        assert!(!rule.evaluate(&connecting(46)));
    }

    #[test]
    fn custom_rejects_negative_threshold() {
        assert_eq!(
            custom_at(t0(), -10).unwrap_err(),
            DomainError::NegativeGroundTime(-10)
        );
        assert!(custom(-1).is_err());
        assert!(custom_duration(Duration::hours(-1)).is_err());
    }

    #[test]
    fn wall_clock_presets_reject_ancient_flights() {
        let ancient = flight(&[(0, 1)]);

        assert!(!standard().evaluate(&ancient));
        assert!(!business().evaluate(&ancient));
        assert!(!basic().evaluate(&ancient));
    }

    #[test]
    fn preset_description_lists_parts() {
        assert_eq!(
            business_at(t0()).description(),
            "((departure_not_before(2024-03-15T08:00) AND arrival_not_before_departure) \
             AND ground_time_at_most(60m))"
        );
    }

    #[test]
    fn combine_matches_and_chain() {
        let rules = || {
            vec![
                DepartureBeforeCurrentTimeFilter::at(t0()).boxed(),
                ArrivalBeforeDepartureFilter.boxed(),
                ExcessiveGroundTimeFilter::default().boxed(),
            ]
        };
        let all = combine(rules());
        let chained = standard_at(t0());

        for f in [
            connecting(30),
            connecting(300),
            flight(&[(-1, 1)]),
            flight(&[(3, 2)]),
        ] {
            assert_eq!(all.evaluate(&f), chained.evaluate(&f));
        }
    }

    #[test]
    fn combine_or_passes_if_any_rule_passes() {
        let either = combine_or(vec![
            DepartureBeforeCurrentTimeFilter::at(t0()).boxed(),
            ArrivalBeforeDepartureFilter.boxed(),
        ]);

        // Past but valid
        assert!(either.evaluate(&flight(&[(-2, -1)])));
        // Future but inverted
        assert!(either.evaluate(&flight(&[(2, 1)])));
        // Past and inverted
        assert!(!either.evaluate(&flight(&[(-1, -2)])));
    }
}
