//! # Error Types
//!
//! A single error enum shared by the requester, the recorder and the logging
//! setup. Every failure is surfaced to the immediate caller; nothing here is
//! retried or swallowed.

use thiserror::Error;

/// Errors that can occur while talking to the elections API or recording its payloads.
#[derive(Debug, Error)]
pub enum ElexError {
    /// No API key was passed as a parameter and none is configured.
    #[error("Oops! You have not exported an AP_API_KEY variable.")]
    MissingApiKey,

    /// Network-level failure (DNS, connection refused, timeout, invalid URL).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success body that is not valid JSON, or a payload that fails to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A 403 body that is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A 403 body without a usable `Message` element.
    #[error("403 response body has no Message element")]
    MissingErrorMessage,

    /// File system failures while writing a flat-file recording.
    #[error("I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// Connection or insert failures against the document store.
    #[cfg(feature = "mongodb")]
    #[error("Document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The payload could not be converted to BSON.
    #[cfg(feature = "mongodb")]
    #[error("BSON conversion error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    /// The selected recording sink was compiled out.
    #[error("Recording sink '{0}' is not available in this build")]
    SinkUnavailable(String),

    /// The global tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Shorthand result type for this crate.
pub type ElexResult<T> = Result<T, ElexError>;
