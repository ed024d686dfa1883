//! # Recorders Module
//!
//! Best-effort persistence of raw API payloads for later replay and debugging.
//!
//! ## Contained Modules:
//!
//! - **`flat_file`**: writes one JSON file per payload, named after the
//!   second it was recorded.
//! - **`document_store`**: inserts one `{time, data}` document per payload
//!   into MongoDB (feature `mongodb`).
//!
//! The [`Recorder`] owns at most one sink, chosen from a
//! [`RecordingMode`] when it is built. Recording never mutates the payload
//! and never retries: a failed write is returned to the caller as is.

use serde_json::{json, Value};

use crate::configs::config_recording::RecordingMode;
use crate::errors::ElexResult;
use crate::utils::time::unix_timestamp;

/// MongoDB recording sink.
#[cfg(feature = "mongodb")]
pub mod document_store;
/// Flat JSON file recording sink.
pub mod flat_file;

/// Collection every document-store recording goes to.
pub const RECORDING_COLLECTION: &str = "elex_recording";

/// A destination for recorded payloads.
pub trait RecordSink: Send + Sync {
    /// Persists `payload` under `timestamp` (Unix seconds).
    fn write(&self, timestamp: i64, payload: &Value) -> ElexResult<()>;
}

/// Builds the document shape stored by document-store sinks.
pub fn recording_document(timestamp: i64, payload: &Value) -> Value {
    json!({ "time": timestamp, "data": payload })
}

/// Records successful API payloads to the sink selected at construction.
#[derive(Default)]
pub struct Recorder {
    sink: Option<Box<dyn RecordSink>>,
}

impl Recorder {
    /// A recorder that does nothing.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Builds the sink matching `mode`.
    ///
    /// # Errors
    /// [`crate::errors::ElexError::SinkUnavailable`] when the document store is requested
    /// but the `mongodb` feature is off.
    pub fn from_mode(mode: &RecordingMode) -> ElexResult<Self> {
        let sink: Option<Box<dyn RecordSink>> = match mode {
            RecordingMode::Disabled => None,
            RecordingMode::FlatFile { directory } => {
                Some(Box::new(flat_file::FlatFileSink::new(directory.clone())))
            }
            #[cfg(feature = "mongodb")]
            RecordingMode::DocumentStore { url, database } => Some(Box::new(
                document_store::MongoSink::new(url.clone(), database.clone()),
            )),
            #[cfg(not(feature = "mongodb"))]
            RecordingMode::DocumentStore { .. } => {
                return Err(crate::errors::ElexError::SinkUnavailable("mongodb".to_string()));
            }
        };
        Ok(Self { sink })
    }

    /// Wraps a caller-provided sink.
    pub fn with_sink<S: RecordSink + 'static>(sink: S) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Persists `payload` if a sink is configured.
    pub fn record(&self, payload: &Value) -> ElexResult<()> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };
        let timestamp = unix_timestamp();
        tracing::debug!(timestamp, "recording payload");
        sink.write(timestamp, payload)
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ElexError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemorySink(Arc<Mutex<Vec<(i64, Value)>>>);

    impl RecordSink for MemorySink {
        fn write(&self, timestamp: i64, payload: &Value) -> ElexResult<()> {
            self.0.lock().unwrap().push((timestamp, payload.clone()));
            Ok(())
        }
    }

    struct FailingSink;

    impl RecordSink for FailingSink {
        fn write(&self, _timestamp: i64, _payload: &Value) -> ElexResult<()> {
            Err(ElexError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn disabled_recorder_is_a_no_op() {
        let recorder = Recorder::from_mode(&RecordingMode::Disabled).unwrap();
        assert!(!recorder.is_enabled());
        recorder.record(&json!({"ok": true})).unwrap();
    }

    #[test]
    fn sink_receives_payload_and_timestamp() {
        let sink = MemorySink::default();
        let recorder = Recorder::with_sink(sink.clone());
        let before = unix_timestamp();
        recorder.record(&json!([1, 2, 3])).unwrap();

        let written = sink.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].0 >= before && written[0].0 <= before + 1);
        assert_eq!(written[0].1, json!([1, 2, 3]));
    }

    #[test]
    fn sink_errors_propagate() {
        let recorder = Recorder::with_sink(FailingSink);
        let err = recorder.record(&json!({})).unwrap_err();
        assert!(matches!(err, ElexError::Io(_)));
    }

    #[test]
    fn document_shape_wraps_payload() {
        let doc = recording_document(1_700_000_000, &json!({"races": []}));
        assert_eq!(doc, json!({"time": 1_700_000_000, "data": {"races": []}}));
    }

    #[cfg(not(feature = "mongodb"))]
    #[test]
    fn document_store_needs_feature() {
        let mode = RecordingMode::DocumentStore {
            url: "mongodb://localhost:27017/".into(),
            database: "ap_elections_loader".into(),
        };
        assert!(matches!(
            Recorder::from_mode(&mode),
            Err(ElexError::SinkUnavailable(_))
        ));
    }
}
