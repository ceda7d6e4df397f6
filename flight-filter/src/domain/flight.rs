//! Flight type.
//!
//! A `Flight` is an itinerary of one or more segments flown in order.
//! Ground time is the wait between one segment's arrival and the next
//! segment's departure.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

use super::{DomainError, Segment};

/// An ordered sequence of segments.
///
/// No ordering is enforced between consecutive segments: a flight may
/// contain overlapping or out-of-order segments. Such connections simply
/// contribute no ground time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    /// Constructs a flight from segments in leg order.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Constructs a flight from alternating departure/arrival timestamps.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an odd number of timestamps is supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_filter::domain::Flight;
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let t = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
    /// let flight = Flight::from_timestamps(&[
    ///     t,
    ///     t + Duration::hours(1),
    ///     t + Duration::hours(2),
    ///     t + Duration::hours(3),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(flight.segment_count(), 2);
    /// assert_eq!(flight.total_ground_time_minutes(), 60);
    ///
    /// assert!(Flight::from_timestamps(&[t]).is_err());
    /// ```
    pub fn from_timestamps(timestamps: &[NaiveDateTime]) -> Result<Self, DomainError> {
        if timestamps.len() % 2 != 0 {
            return Err(DomainError::OddTimestampCount(timestamps.len()));
        }

        let segments = timestamps
            .chunks_exact(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();

        Ok(Self { segments })
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the flight has no connections (at most one segment).
    pub fn is_direct(&self) -> bool {
        self.segments.len() <= 1
    }

    /// Returns the signed gap between each pair of consecutive segments.
    ///
    /// The gap is the next departure minus the current arrival, so it is
    /// negative when the next segment departs before the current one lands.
    pub fn connection_gaps(&self) -> impl Iterator<Item = Duration> + '_ {
        self.segments.windows(2).map(|pair| {
            pair[1]
                .departure()
                .signed_duration_since(pair[0].arrival())
        })
    }

    /// Returns the total ground time in whole minutes.
    ///
    /// Each connection contributes only when the next segment departs
    /// strictly after the current one arrives; overlapping connections
    /// contribute zero rather than a negative adjustment. Minutes are
    /// truncated per connection.
    pub fn total_ground_time_minutes(&self) -> i64 {
        self.connection_gaps()
            .filter(|gap| *gap > Duration::zero())
            .map(|gap| gap.num_minutes())
            .sum()
    }

    /// Returns the total ground time as a duration.
    pub fn total_ground_time(&self) -> Duration {
        Duration::minutes(self.total_ground_time_minutes())
    }

    /// Returns true if any segment arrives before it departs.
    pub fn has_invalid_segments(&self) -> bool {
        self.segments.iter().any(|s| !s.is_valid())
    }

    /// Returns true if any segment departs before `reference`.
    pub fn has_departure_in_past(&self, reference: NaiveDateTime) -> bool {
        self.segments.iter().any(|s| s.departure() < reference)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
