//! Marketplace and account layer around the emissions engine.
//!
//! Document store, credential handling, footprint recording,
//! credit purchases, certificates, the eco-product catalog, and the
//! dashboard aggregation.

pub mod auth;
pub mod dashboard;
pub mod platform;
pub mod seed;
pub mod store;

pub use platform::CarbonPlatform;
