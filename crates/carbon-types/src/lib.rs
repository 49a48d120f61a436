//! Shared domain types for the Carbon Ledger platform.
//!
//! Sits at the bottom of the workspace dependency graph: the emissions
//! engine and the marketplace layer both build on these types.

pub mod config;
pub mod constants;
pub mod error;
pub mod footprint;
pub mod models;
