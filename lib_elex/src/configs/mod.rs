//! # Configuration Modules
//!
//! This module aggregates the two configuration values the client needs:
//! the API endpoint/credential pair and the recording mode. Both are resolved
//! once and handed to the components that use them.

/// API base URL and key, resolved from `.env` / environment or built explicitly.
pub mod config_api;

/// Recording mode selection (`ELEX_RECORDING*` variables).
pub mod config_recording;
