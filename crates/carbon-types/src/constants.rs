// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Constants
// License: MIT
// ─────────────────────────────────────────────────────────────────────
/// Market price used for the offset cost estimate (USD per ton CO2e).
pub const OFFSET_PRICE_PER_TON: f64 = 20.0;

/// Issued certificates stay valid for one year.
pub const CERTIFICATE_VALID_DAYS: i64 = 365;

/// Session tokens expire after this many hours unless config overrides.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Tree-planting equivalent of one offset credit (one ton CO2e).
pub const TREES_PER_CREDIT: f64 = 2.3;

/// Cars-off-the-road equivalent of one offset credit.
pub const CARS_PER_CREDIT: f64 = 0.035;

/// Annual household energy equivalent of one offset credit.
pub const HOMES_PER_CREDIT: f64 = 0.062;

/// Months of history in the dashboard progress series.
pub const PROGRESS_MONTHS: usize = 6;
