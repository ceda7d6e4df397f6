//! Flight filtering.
//!
//! Selects flights that satisfy composable rules: no segment arriving
//! before it departs, no departure before a reference time, and bounded
//! ground time between connections.

pub mod config;
pub mod domain;
pub mod dto;
pub mod engine;
pub mod logging;
pub mod printer;
pub mod rules;
pub mod sample;
