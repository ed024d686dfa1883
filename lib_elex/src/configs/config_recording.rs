//! # Recording Configuration
//!
//! Maps the `ELEX_RECORDING*` variables onto a [`RecordingMode`]. The mode is
//! read once and given to the recorder, instead of being looked up again on
//! every request.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const RECORDING_VAR: &str = "ELEX_RECORDING";
pub const RECORDING_DIR_VAR: &str = "ELEX_RECORDING_DIR";
pub const RECORDING_MONGO_URL_VAR: &str = "ELEX_RECORDING_MONGO_URL";
pub const RECORDING_MONGO_DB_VAR: &str = "ELEX_RECORDING_MONGO_DB";

pub const DEFAULT_RECORDING_DIR: &str = "/tmp";
pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017/";
pub const DEFAULT_MONGO_DB: &str = "ap_elections_loader";

/// Where, if anywhere, successful payloads are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordingMode {
    #[default]
    Disabled,
    /// One JSON file per payload in `directory`.
    FlatFile { directory: PathBuf },
    /// One document per payload in `database`, fixed collection.
    DocumentStore { url: String, database: String },
}

impl RecordingMode {
    /// Reads the recording variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves the mode through an arbitrary variable lookup.
    ///
    /// Unset or empty selects [`RecordingMode::Disabled`]. Unknown selector
    /// values are accepted and also disable recording.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let selector = lookup(RECORDING_VAR).unwrap_or_default();
        let or_default = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        match selector.as_str() {
            "" => RecordingMode::Disabled,
            "flat" => RecordingMode::FlatFile {
                directory: PathBuf::from(or_default(RECORDING_DIR_VAR, DEFAULT_RECORDING_DIR)),
            },
            "mongodb" => RecordingMode::DocumentStore {
                url: or_default(RECORDING_MONGO_URL_VAR, DEFAULT_MONGO_URL),
                database: or_default(RECORDING_MONGO_DB_VAR, DEFAULT_MONGO_DB),
            },
            other => {
                tracing::debug!(selector = other, "ignoring unrecognized recording mode");
                RecordingMode::Disabled
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, RecordingMode::Disabled)
    }
}
