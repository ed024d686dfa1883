//! # Flat File Recording
//!
//! Writes each payload to `<dir>/ap_elections_loader_recording-<ts>.json`.
//! Two recordings in the same second share a name; the later one wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::RecordSink;
use crate::errors::ElexResult;

/// File name prefix shared by all flat-file recordings.
pub const RECORDING_FILE_PREFIX: &str = "ap_elections_loader_recording";

/// File name for a recording taken at `timestamp`.
pub fn recording_file_name(timestamp: i64) -> String {
    format!("{}-{}.json", RECORDING_FILE_PREFIX, timestamp)
}

/// Recording sink backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FlatFileSink {
    directory: PathBuf,
}

impl FlatFileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the file a recording at `timestamp` is written to.
    pub fn path_for(&self, timestamp: i64) -> PathBuf {
        self.directory.join(recording_file_name(timestamp))
    }
}

impl RecordSink for FlatFileSink {
    fn write(&self, timestamp: i64, payload: &Value) -> ElexResult<()> {
        let path = self.path_for(timestamp);
        let contents = serde_json::to_string(payload)?;
        fs::write(&path, contents)?;
        tracing::trace!(path = %path.display(), "flat-file recording written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ElexError;
    use serde_json::json;

    #[test]
    fn file_name_pattern() {
        assert_eq!(
            recording_file_name(1_478_000_000),
            "ap_elections_loader_recording-1478000000.json"
        );
    }

    #[test]
    fn writes_payload_that_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FlatFileSink::new(dir.path());
        sink.write(42, &json!({"ok": true})).unwrap();

        let raw = fs::read_to_string(dir.path().join(recording_file_name(42))).unwrap();
        let back: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, json!({"ok": true}));
    }

    #[test]
    fn same_second_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FlatFileSink::new(dir.path());
        sink.write(7, &json!({"first": 1})).unwrap();
        sink.write(7, &json!({"second": 2})).unwrap();

        let raw = fs::read_to_string(sink.path_for(7)).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&raw).unwrap(), json!({"second": 2}));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FlatFileSink::new(dir.path().join("does-not-exist"));
        let err = sink.write(1, &json!(null)).unwrap_err();
        assert!(matches!(err, ElexError::Io(_)));
    }
}
