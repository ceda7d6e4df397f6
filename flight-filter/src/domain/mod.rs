//! Domain types for flight filtering.
//!
//! A `Flight` is an ordered sequence of `Segment`s. Neither type enforces
//! ordering between timestamps at construction: inverted segments and
//! overlapping connections are representable, and it is up to the filter
//! rules to reject them.

mod error;
mod flight;
mod segment;

pub use error::DomainError;
pub use flight::Flight;
pub use segment::{Segment, TIMESTAMP_FORMAT};
