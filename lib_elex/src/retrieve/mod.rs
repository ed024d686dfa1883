//! # Data Retrieval Module
//!
//! The HTTP side of the crate: the blocking elections API requester and the
//! parser for the XML error bodies the API sends on authorization failures.
//!
//! ## Contained Modules:
//!
//! - **`requester`**: `ApiClient::api_request`, API key resolution, query
//!   building, recording of successful payloads and 403 diagnostics.
//! - **`error_body`**: extracts the `Message` text from a 403 XML body.

/// Blocking elections API client.
pub mod requester;
/// XML error body parsing.
pub mod error_body;
