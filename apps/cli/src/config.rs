//! # Application Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ASHKANA_*`)
//! 2. Config file (JSON, path in `ASHKANA_CONFIG`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.
//!
//! ## A Note on the Admin Passphrase
//! The passphrase is an injected configuration value compared for equality.
//! It is a toy gate for a single-terminal simulator, NOT a security
//! boundary: no hashing, no rate limiting, one attempt per panel entry.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Store name (displayed on receipts and the welcome banner).
    pub store_name: String,

    /// Admin panel passphrase (equality match, single attempt).
    pub admin_passphrase: String,
}

impl Default for AppConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Ashkana"
    /// - Passphrase: "123321"
    fn default() -> Self {
        AppConfig {
            store_name: "Ashkana".to_string(),
            admin_passphrase: "123321".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration: defaults, then config file, then environment.
    ///
    /// ## Environment Variables
    /// - `ASHKANA_CONFIG`: path to a JSON config file
    /// - `ASHKANA_STORE_NAME`: override store name
    /// - `ASHKANA_ADMIN_PASSPHRASE`: override admin passphrase
    ///
    /// A missing or unparseable config file is reported and ignored;
    /// startup never fails on configuration.
    pub fn load() -> Self {
        let mut config = AppConfig::default();

        if let Ok(path) = std::env::var("ASHKANA_CONFIG") {
            match std::fs::read_to_string(&path) {
                Ok(text) => match AppConfig::from_json(&text) {
                    Ok(parsed) => config = parsed,
                    Err(err) => warn!(%path, %err, "ignoring unparseable config file"),
                },
                Err(err) => warn!(%path, %err, "ignoring unreadable config file"),
            }
        }

        if let Ok(store_name) = std::env::var("ASHKANA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(passphrase) = std::env::var("ASHKANA_ADMIN_PASSPHRASE") {
            config.admin_passphrase = passphrase;
        }

        config
    }

    /// Parses a JSON config document. Missing fields fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
