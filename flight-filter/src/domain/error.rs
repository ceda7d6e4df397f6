//! Domain error types.
//!
//! These errors represent invalid construction arguments. Once a value has
//! been built, every derived computation on it is total.

/// Domain-level errors for invalid construction arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Ground time threshold below zero
    #[error("maximum ground time cannot be negative: {0} minutes")]
    NegativeGroundTime(i64),

    /// Timestamps cannot be paired into departure/arrival segments
    #[error("expected an even number of timestamps, got {0}")]
    OddTimestampCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::NegativeGroundTime(-5);
        assert_eq!(
            err.to_string(),
            "maximum ground time cannot be negative: -5 minutes"
        );

        let err = DomainError::OddTimestampCount(3);
        assert_eq!(err.to_string(), "expected an even number of timestamps, got 3");
    }
}
