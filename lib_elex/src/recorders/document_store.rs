//! # MongoDB Recording
//!
//! Synchronous MongoDB sink. A fresh client is opened for every recording;
//! nothing is pooled between calls.

use mongodb::bson::{self, doc, Document};
use mongodb::sync::Client;
use serde_json::Value;

use super::{RecordSink, RECORDING_COLLECTION};
use crate::errors::ElexResult;

/// Recording sink that inserts `{time, data}` documents into MongoDB.
#[derive(Debug, Clone)]
pub struct MongoSink {
    /// Connection string (e.g., "mongodb://localhost:27017/").
    url: String,
    /// Database holding the recording collection.
    database: String,
}

impl MongoSink {
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
        }
    }

    /// Converts a recording into the BSON document that gets inserted.
    pub fn to_document(timestamp: i64, payload: &Value) -> ElexResult<Document> {
        Ok(doc! {
            "time": timestamp,
            "data": bson::to_bson(payload)?,
        })
    }
}

impl RecordSink for MongoSink {
    fn write(&self, timestamp: i64, payload: &Value) -> ElexResult<()> {
        let document = Self::to_document(timestamp, payload)?;

        let client = Client::with_uri_str(&self.url)?;
        let result = client
            .database(&self.database)
            .collection::<Document>(RECORDING_COLLECTION)
            .insert_one(document)
            .run()?;

        tracing::trace!(
            database = %self.database,
            id = %result.inserted_id,
            "document-store recording inserted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorders::recording_document;
    use mongodb::bson::Bson;
    use serde_json::json;

    #[test]
    fn document_matches_recording_shape() {
        let payload = json!({"races": [{"raceID": "10670", "statePostal": "IA"}]});
        let document = MongoSink::to_document(1_454_000_000, &payload).unwrap();

        assert_eq!(document.get("time"), Some(&Bson::Int64(1_454_000_000)));
        let back: Value = bson::from_bson(Bson::Document(document)).unwrap();
        assert_eq!(back, recording_document(1_454_000_000, &payload));
    }

    #[test]
    fn scalar_payloads_are_kept() {
        let document = MongoSink::to_document(1, &json!("raw")).unwrap();
        assert_eq!(document.get_str("data").unwrap(), "raw");
    }

    #[test]
    #[ignore = "needs a MongoDB server on localhost:27017"]
    fn inserts_into_local_server() {
        let sink = MongoSink::new("mongodb://localhost:27017/", "elex_recording_test");
        sink.write(1, &json!({"ok": true})).unwrap();
    }
}
