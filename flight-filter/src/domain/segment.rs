//! Flight segment type.
//!
//! A `Segment` is one leg of a flight: a departure timestamp and an arrival
//! timestamp in local time. Segments may carry a timezone, but it is
//! informational only and never takes part in comparisons or filtering.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Format used when rendering segment timestamps (`2024-03-15T10:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One leg of a flight.
///
/// Construction never fails: a segment whose arrival precedes its departure
/// is representable and reported by [`Segment::is_valid`].
///
/// Equality and hashing consider only the departure and arrival timestamps.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::Segment;
/// use chrono::NaiveDate;
///
/// let dep = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let arr = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
///
/// let segment = Segment::new(dep, arr);
/// assert!(segment.is_valid());
/// assert_eq!(segment.to_string(), "[2024-03-15T10:00|2024-03-15T12:00]");
///
/// let inverted = Segment::new(arr, dep);
/// assert!(!inverted.is_valid());
/// ```
#[derive(Clone, Copy)]
pub struct Segment {
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    zone: Option<Tz>,
}

impl Segment {
    /// Create a segment from local departure and arrival timestamps.
    pub fn new(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self {
            departure,
            arrival,
            zone: None,
        }
    }

    /// Attach a timezone to this segment.
    pub fn with_zone(mut self, zone: Tz) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Returns the departure timestamp.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the arrival timestamp.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the attached timezone, if any.
    pub fn zone(&self) -> Option<Tz> {
        self.zone
    }

    /// Returns true if the arrival is not before the departure.
    ///
    /// Zero-duration segments are valid.
    pub fn is_valid(&self) -> bool {
        self.arrival >= self.departure
    }

    /// Returns the signed time from departure to arrival.
    ///
    /// Negative for inverted segments.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns the departure interpreted in the segment's zone (UTC if none).
    ///
    /// Returns `None` if the local time does not exist in that zone (e.g.
    /// inside a daylight-saving gap). Ambiguous times resolve to the earlier
    /// instant.
    pub fn departure_zoned(&self) -> Option<DateTime<Tz>> {
        self.localize(self.departure)
    }

    /// Returns the arrival interpreted in the segment's zone (UTC if none).
    ///
    /// See [`Segment::departure_zoned`] for how gaps and overlaps resolve.
    pub fn arrival_zoned(&self) -> Option<DateTime<Tz>> {
        self.localize(self.arrival)
    }

    fn localize(&self, local: NaiveDateTime) -> Option<DateTime<Tz>> {
        self.zone
            .unwrap_or(Tz::UTC)
            .from_local_datetime(&local)
            .earliest()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.departure == other.departure && self.arrival == other.arrival
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.departure.hash(state);
        self.arrival.hash(state);
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment({} -> {}",
            self.departure.format(TIMESTAMP_FORMAT),
            self.arrival.format(TIMESTAMP_FORMAT)
        )?;
        if let Some(zone) = self.zone {
            write!(f, " {zone}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(TIMESTAMP_FORMAT),
            self.arrival.format(TIMESTAMP_FORMAT)
        )
    }
}
