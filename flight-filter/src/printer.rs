//! Plain-text rendering of flights.

use std::fmt::Write;

use chrono::Duration;

use crate::domain::{Flight, TIMESTAMP_FORMAT};

/// Separator placed between rendered flights.
const FLIGHT_SEPARATOR: &str = "\n---\n";

/// Render one flight as a numbered block.
///
/// Each segment gets its own line, followed by the ground time before the
/// next segment unless that segment departs before this one lands.
/// Multi-segment flights end with the total ground time.
pub fn format_flight(flight: &Flight, index: usize) -> String {
    let mut out = format!("Flight #{index}:\n");
    let mut gaps = flight.connection_gaps();

    // Writing to a String cannot fail
    for (i, segment) in flight.segments().iter().enumerate() {
        let _ = writeln!(
            out,
            "  Segment {}: {} → {}",
            i + 1,
            segment.departure().format(TIMESTAMP_FORMAT),
            segment.arrival().format(TIMESTAMP_FORMAT)
        );

        if let Some(gap) = gaps.next().filter(|gap| *gap >= Duration::zero()) {
            let _ = writeln!(out, "  Ground time: {}", format_duration(gap));
        }
    }

    if flight.segment_count() > 1 {
        let _ = writeln!(
            out,
            "  Total ground time: {}",
            format_duration(flight.total_ground_time())
        );
    }

    out
}

/// Render a list of flights, numbered from 1.
pub fn format_flights(flights: &[Flight]) -> String {
    if flights.is_empty() {
        return "No flights found.\n".to_string();
    }

    flights
        .iter()
        .enumerate()
        .map(|(i, flight)| format_flight(flight, i + 1))
        .collect::<Vec<_>>()
        .join(FLIGHT_SEPARATOR)
}

/// Render a duration as `Xh Ym`, `Xh` or `Ym`.
pub fn format_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;

    match (hours, minutes) {
        (h, m) if h > 0 && m > 0 => format!("{h}h {m}m"),
        (h, _) if h > 0 => format!("{h}h"),
        (_, m) => format!("{m}m"),
    }
}
