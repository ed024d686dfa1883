//! # lib_elex
//!
//! Client helper for the AP elections API: builds a keyed GET request,
//! records successful JSON payloads to a flat file or MongoDB, and reports
//! the API's own message on standard error when a request is refused (403).
//!
//! ```no_run
//! use lib_elex::{ApiClient, ElexConfig, Recorder, RecordingMode};
//!
//! # fn main() -> Result<(), lib_elex::ElexError> {
//! let recorder = Recorder::from_mode(&RecordingMode::from_env())?;
//! let client = ApiClient::new(ElexConfig::from_env(), recorder);
//! let response = client.api_request("/elections", &[("level", "ru")])?;
//! println!("{} {}", response.status, response.url);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]

pub mod configs;
pub mod errors;
#[cfg(feature = "loggers")]
pub mod loggers;
pub mod recorders;
pub mod retrieve;
pub mod utils;

// Re-export the everyday surface
pub use configs::config_api::ElexConfig;
pub use configs::config_recording::RecordingMode;
pub use errors::{ElexError, ElexResult};
pub use recorders::{RecordSink, Recorder};
pub use retrieve::requester::{ApiClient, ApiResponse};
