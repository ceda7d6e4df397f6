//! Compound rules.
//!
//! Binary combinators (`And`, `Or`, `Not`) wrap their operands by value;
//! `AllRules` and `AnyRules` hold an arbitrary list evaluated in order.
//! All of them short-circuit.

use std::fmt;

use super::{BoxedRule, FilterRule};
use crate::domain::Flight;

/// Conjunction of two rules. Built with [`FilterRule::and`].
#[derive(Debug, Clone)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: FilterRule, B: FilterRule> FilterRule for And<A, B> {
    fn evaluate(&self, flight: &Flight) -> bool {
        self.first.evaluate(flight) && self.second.evaluate(flight)
    }

    fn description(&self) -> String {
        format!(
            "({} AND {})",
            self.first.description(),
            self.second.description()
        )
    }
}

/// Disjunction of two rules. Built with [`FilterRule::or`].
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: FilterRule, B: FilterRule> FilterRule for Or<A, B> {
    fn evaluate(&self, flight: &Flight) -> bool {
        self.first.evaluate(flight) || self.second.evaluate(flight)
    }

    fn description(&self) -> String {
        format!(
            "({} OR {})",
            self.first.description(),
            self.second.description()
        )
    }
}

/// Negation of a rule. Built with [`FilterRule::negate`].
#[derive(Debug, Clone)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    pub(crate) fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: FilterRule> FilterRule for Not<A> {
    fn evaluate(&self, flight: &Flight) -> bool {
        !self.inner.evaluate(flight)
    }

    fn description(&self) -> String {
        format!("NOT {}", self.inner.description())
    }
}

/// A list of rules that must all pass.
///
/// Rules are evaluated in list order and evaluation stops at the first
/// failure. An empty list passes every flight.
pub struct AllRules {
    rules: Vec<BoxedRule>,
}

impl AllRules {
    /// Create a conjunction over `rules`.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FilterRule for AllRules {
    fn evaluate(&self, flight: &Flight) -> bool {
        self.rules.iter().all(|rule| rule.evaluate(flight))
    }

    fn description(&self) -> String {
        if self.rules.is_empty() {
            return "all(empty)".to_string();
        }
        let parts: Vec<String> = self.rules.iter().map(|r| r.description()).collect();
        format!("all({})", parts.join(" AND "))
    }
}

/// A list of rules of which at least one must pass.
///
/// Rules are evaluated in list order and evaluation stops at the first
/// success. An empty list rejects every flight.
pub struct AnyRules {
    rules: Vec<BoxedRule>,
}

impl AnyRules {
    /// Create a disjunction over `rules`.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FilterRule for AnyRules {
    fn evaluate(&self, flight: &Flight) -> bool {
        self.rules.iter().any(|rule| rule.evaluate(flight))
    }

    fn description(&self) -> String {
        if self.rules.is_empty() {
            return "any(empty)".to_string();
        }
        let parts: Vec<String> = self.rules.iter().map(|r| r.description()).collect();
        format!("any({})", parts.join(" OR "))
    }
}

// Box<dyn FilterRule> doesn't implement Debug
impl fmt::Debug for AllRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllRules")
            .field("rules", &self.description())
            .finish()
    }
}

impl fmt::Debug for AnyRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyRules")
            .field("rules", &self.description())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::rules::test_support::*;
    use crate::rules::{ArrivalBeforeDepartureFilter, from_fn};

    fn always(verdict: bool) -> BoxedRule {
        from_fn(format!("always({verdict})"), move |_: &Flight| verdict).boxed()
    }

    #[test]
    fn and_truth_table() {
        let f = flight(&[(0, 1)]);
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            assert_eq!(always(a).and(always(b)).evaluate(&f), a && b);
        }
    }

    #[test]
    fn or_truth_table() {
        let f = flight(&[(0, 1)]);
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            assert_eq!(always(a).or(always(b)).evaluate(&f), a || b);
        }
    }

    #[test]
    fn negate_inverts() {
        let f = flight(&[(0, 1)]);
        assert!(!always(true).negate().evaluate(&f));
        assert!(always(false).negate().evaluate(&f));
    }

    #[test]
    fn and_short_circuits_on_false() {
        let first_calls = Cell::new(0);
        let second_calls = Cell::new(0);
        let rule = Counting {
            verdict: false,
            calls: &first_calls,
        }
        .and(Counting {
            verdict: true,
            calls: &second_calls,
        });

        assert!(!rule.evaluate(&flight(&[(0, 1)])));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn or_short_circuits_on_true() {
        let first_calls = Cell::new(0);
        let second_calls = Cell::new(0);
        let rule = Counting {
            verdict: true,
            calls: &first_calls,
        }
        .or(Counting {
            verdict: false,
            calls: &second_calls,
        });

        assert!(rule.evaluate(&flight(&[(0, 1)])));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn rule_and_its_negation() {
        let rule = ArrivalBeforeDepartureFilter;
        let valid = flight(&[(0, 1)]);
        let invalid = flight(&[(1, 0)]);

        for f in [&valid, &invalid] {
            assert!(!(&rule).and((&rule).negate()).evaluate(f));
            assert!((&rule).or((&rule).negate()).evaluate(f));
        }
    }

    #[test]
    fn combinator_descriptions() {
        let rule = always(true).and(always(false).negate()).or(always(false));
        assert_eq!(
            rule.description(),
            "((always(true) AND NOT always(false)) OR always(false))"
        );
    }

    #[test]
    fn all_rules_empty_passes() {
        let all = AllRules::new(vec![]);

        assert!(all.is_empty());
        assert!(all.evaluate(&flight(&[(0, 1)])));
        assert_eq!(all.description(), "all(empty)");
    }

    #[test]
    fn any_rules_empty_rejects() {
        let any = AnyRules::new(vec![]);

        assert!(any.is_empty());
        assert!(!any.evaluate(&flight(&[(0, 1)])));
        assert_eq!(any.description(), "any(empty)");
    }

    #[test]
    fn all_rules_stops_at_first_failure() {
        let f = flight(&[(0, 1)]);
        let all = AllRules::new(vec![always(true), always(false), always(true)]);

        assert_eq!(all.len(), 3);
        assert!(!all.evaluate(&f));
        assert_eq!(
            all.description(),
            "all(always(true) AND always(false) AND always(true))"
        );
    }

    #[test]
    fn any_rules_passes_on_any() {
        let f = flight(&[(0, 1)]);
        let any = AnyRules::new(vec![always(false), always(true)]);

        assert_eq!(any.len(), 2);
        assert!(any.evaluate(&f));
        assert_eq!(any.description(), "any(always(false) OR always(true))");
    }

    #[test]
    fn debug_shows_description() {
        let all = AllRules::new(vec![always(true)]);
        let debug_str = format!("{:?}", all);
        assert!(debug_str.contains("AllRules"));
        assert!(debug_str.contains("always(true)"));
    }
}
