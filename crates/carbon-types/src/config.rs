// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Config
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::SESSION_TTL_HOURS;
use crate::error::CarbonResult;

/// Platform configuration, loaded from a JSON file.
/// Every field has a default so a partial (or empty) config is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub platform_name: String,
    /// Snapshot file for the document store.
    /// `None` keeps the store purely in memory.
    pub snapshot_path: Option<PathBuf>,
    /// Session token lifetime in hours.
    pub session_ttl_hours: i64,
    /// Load the demo project/product catalog on startup.
    pub seed_demo_catalog: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        PlatformConfig {
            platform_name: "Carbon Ledger".to_string(),
            snapshot_path: None,
            session_ttl_hours: SESSION_TTL_HOURS,
            seed_demo_catalog: false,
        }
    }
}

impl PlatformConfig {
    pub fn from_file(path: &Path) -> CarbonResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlatformConfig::default();
        assert_eq!(config.session_ttl_hours, 24);
        assert!(config.snapshot_path.is_none());
        assert!(!config.seed_demo_catalog);
    }

    #[test]
    fn test_partial_json() {
        let config: PlatformConfig =
            serde_json::from_str(r#"{"session_ttl_hours": 8}"#).unwrap();
        assert_eq!(config.session_ttl_hours, 8);
        assert_eq!(config.platform_name, "Carbon Ledger");
    }

    #[test]
    fn test_empty_json() {
        let config: PlatformConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.session_ttl_hours, 24);
    }
}
