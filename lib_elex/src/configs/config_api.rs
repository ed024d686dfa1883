//! # API Configuration
//!
//! The base URL and API key used by every request. The pair is built once at
//! startup and passed to [`crate::retrieve::requester::ApiClient`] so that no
//! request depends on hidden global state.

use std::{env, fmt};

use serde::{Deserialize, Serialize};

/// Environment variable holding the AP API key.
pub const API_KEY_VAR: &str = "AP_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "AP_API_BASE_URL";
/// Base URL used when `AP_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://api.ap.org/v2";

/// Endpoint and credential for the elections API.
#[derive(Default, Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ElexConfig {
    /// Prefix every request path is appended to (no separator is inserted).
    pub base_url: String,
    /// Process-wide API key. Empty means "not configured".
    pub api_key: String,
}

impl ElexConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Loads `.env` if present, then reads `AP_API_BASE_URL` and `AP_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();

        Self { base_url, api_key }
    }

    /// The configured key, if it is non-empty.
    pub fn configured_key(&self) -> Option<&str> {
        Some(self.api_key.as_str()).filter(|k| !k.is_empty())
    }
}

impl fmt::Display for ElexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the key itself.
        write!(
            f,
            "ElexConfig
    Base URL: {},
    API key configured: {}
",
            self.base_url,
            self.configured_key().is_some()
        )
    }
}
