//! Serializable reports of filtering results.

use serde::Serialize;

use crate::domain::{Flight, Segment, TIMESTAMP_FORMAT};

/// Outcome of applying one rule to a list of flights.
#[derive(Debug, Serialize)]
pub struct FilterReport {
    /// Title of this run
    pub title: String,

    /// Description of the applied rule
    pub rule: String,

    /// Number of flights before filtering
    pub input_count: usize,

    /// Number of flights kept
    pub kept_count: usize,

    /// Kept flights, in input order
    pub flights: Vec<FlightResult>,
}

/// A flight in a report.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Segments in order
    pub segments: Vec<SegmentResult>,

    /// Total ground time in minutes
    pub total_ground_time_mins: i64,
}

/// A segment in a report.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Departure, `YYYY-MM-DDTHH:MM`
    pub departure: String,

    /// Arrival, `YYYY-MM-DDTHH:MM`
    pub arrival: String,

    /// Timezone name, if one is attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    /// Whether arrival is not before departure
    pub valid: bool,
}

impl FilterReport {
    /// Build a report from the flights a rule kept.
    pub fn new(
        title: impl Into<String>,
        rule: impl Into<String>,
        input_count: usize,
        kept: &[Flight],
    ) -> Self {
        Self {
            title: title.into(),
            rule: rule.into(),
            input_count,
            kept_count: kept.len(),
            flights: kept.iter().map(FlightResult::from_flight).collect(),
        }
    }
}

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            segments: flight
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_ground_time_mins: flight.total_ground_time_minutes(),
        }
    }
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            departure: segment.departure().format(TIMESTAMP_FORMAT).to_string(),
            arrival: segment.arrival().format(TIMESTAMP_FORMAT).to_string(),
            zone: segment.zone().map(|tz| tz.name().to_string()),
            valid: segment.is_valid(),
        }
    }
}
