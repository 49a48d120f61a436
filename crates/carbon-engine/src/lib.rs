//! Emissions calculation engine.
//!
//! A pure, deterministic mapping from raw business activity data to an
//! annual emissions estimate: category breakdown, total, advisory
//! recommendations, and an offset cost estimate. No state, no I/O, safe
//! to call from any number of threads.

pub mod calculator;
pub mod recommend;

pub use calculator::calculate;
