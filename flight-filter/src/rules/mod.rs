//! Filter rules over flights.
//!
//! A rule is a pure predicate `&Flight -> bool`. Rules compose with
//! [`FilterRule::and`], [`FilterRule::or`] and [`FilterRule::negate`]
//! without mutating their operands, and any closure can be adapted into a
//! rule with [`from_fn`].

mod arrival;
mod composite;
mod departure;
mod ground_time;
pub mod presets;

use std::fmt;

use crate::domain::Flight;

pub use arrival::ArrivalBeforeDepartureFilter;
pub use composite::{AllRules, And, AnyRules, Not, Or};
pub use departure::DepartureBeforeCurrentTimeFilter;
pub use ground_time::{DEFAULT_MAX_GROUND_TIME_MINUTES, ExcessiveGroundTimeFilter};

/// A heap-allocated rule that can be stored in lists and shared across threads.
pub type BoxedRule = Box<dyn FilterRule + Send + Sync>;

/// A boolean predicate over a flight.
///
/// `evaluate` returns true when the flight passes (is kept).
pub trait FilterRule {
    /// Returns true if the flight satisfies this rule.
    fn evaluate(&self, flight: &Flight) -> bool;

    /// Human-readable description, including any parameters.
    fn description(&self) -> String;

    /// True iff both rules are true. `other` is not evaluated when `self`
    /// is false.
    fn and<R: FilterRule>(self, other: R) -> And<Self, R>
    where
        Self: Sized,
    {
        And::new(self, other)
    }

    /// True iff at least one rule is true. `other` is not evaluated when
    /// `self` is true.
    fn or<R: FilterRule>(self, other: R) -> Or<Self, R>
    where
        Self: Sized,
    {
        Or::new(self, other)
    }

    /// True iff this rule is false.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Box this rule for storage alongside rules of other types.
    fn boxed(self) -> BoxedRule
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<R: FilterRule + ?Sized> FilterRule for &R {
    fn evaluate(&self, flight: &Flight) -> bool {
        (**self).evaluate(flight)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<R: FilterRule + ?Sized> FilterRule for Box<R> {
    fn evaluate(&self, flight: &Flight) -> bool {
        (**self).evaluate(flight)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// A rule backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Clone)]
pub struct FnRule<F> {
    name: String,
    predicate: F,
}

impl<F> FilterRule for FnRule<F>
where
    F: Fn(&Flight) -> bool,
{
    fn evaluate(&self, flight: &Flight) -> bool {
        (self.predicate)(flight)
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

/// Adapt a boolean function of a flight into a rule.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::Flight;
/// use flight_filter::rules::{from_fn, FilterRule};
///
/// let direct_only = from_fn("direct_only", |f: &Flight| f.is_direct());
///
/// assert!(direct_only.evaluate(&Flight::new(vec![])));
/// assert_eq!(direct_only.description(), "direct_only");
/// ```
pub fn from_fn<F>(name: impl Into<String>, predicate: F) -> FnRule<F>
where
    F: Fn(&Flight) -> bool,
{
    FnRule {
        name: name.into(),
        predicate,
    }
}
