// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Credentials & Sessions
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Password hashing and session tokens.
//!
//! Passwords are bcrypt-hashed. Sessions are opaque bearer tokens with
//! a fixed lifetime, held in memory and never persisted in snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use carbon_types::error::{CarbonError, CarbonResult};

pub fn hash_password(password: &str) -> CarbonResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| CarbonError::Hash(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> CarbonResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| CarbonError::Hash(e.to_string()))
}

#[derive(Debug, Clone, Copy)]
struct Session {
    business_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// Live bearer tokens mapped to the business they authenticate.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry::default()
    }

    /// Issue a fresh token for a business. Returns the token value and
    /// its expiry.
    pub fn issue(&mut self, business_id: Uuid, ttl_hours: i64) -> (String, DateTime<Utc>) {
        let token = Uuid::new_v4().simple().to_string();
        let expires_at = Utc::now() + Duration::hours(ttl_hours);
        self.sessions.insert(
            token.clone(),
            Session {
                business_id,
                expires_at,
            },
        );
        (token, expires_at)
    }

    /// Resolve a token to its business id. Unknown and expired tokens
    /// are indistinguishable to the caller.
    pub fn resolve(&self, token: &str) -> CarbonResult<Uuid> {
        match self.sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Ok(session.business_id),
            _ => Err(CarbonError::TokenInvalid),
        }
    }

    pub fn revoke(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop every expired session.
    pub fn purge_expired(&mut self) {
        let now = Utc::now();
        self.sessions.retain(|_, s| s.expires_at > now);
    }
}
