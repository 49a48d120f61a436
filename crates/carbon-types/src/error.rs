// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Errors
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarbonError {
    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("invalid or expired session token")]
    TokenInvalid,

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("only {available} credits available, {requested} requested")]
    InsufficientCredits { available: u32, requested: u32 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CarbonResult<T> = Result<T, CarbonError>;
