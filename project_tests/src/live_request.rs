//! # Live Elections API Request
//!
//! Performs one real round trip against the AP elections API using the
//! environment configuration (`AP_API_KEY`, `AP_API_BASE_URL`,
//! `ELEX_RECORDING*`) and logs what came back. The request path defaults to
//! `/elections` and can be changed with `ELEX_LIVE_PATH`.

#![forbid(unsafe_code)]

use anyhow::Result;
use std::env;
use tracing::{error, info, warn};

use lib_elex::loggers::tracing_setup::setup_logging;
use lib_elex::utils::time::current_datetime_rfc9557;
use lib_elex::{ApiClient, ElexConfig, Recorder, RecordingMode};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _guard = setup_logging("live_request")?;

    let config = ElexConfig::from_env();
    info!("{}", config);

    let mode = RecordingMode::from_env();
    info!(?mode, "recording mode");
    let client = ApiClient::new(config, Recorder::from_mode(&mode)?);

    let path = env::var("ELEX_LIVE_PATH").unwrap_or_else(|_| "/elections".to_string());
    let started = current_datetime_rfc9557();

    match client.api_request(&path, &[]) {
        Ok(response) if response.success => {
            let summary = response
                .json()
                .map(|v| serde_json::to_string(v).unwrap_or_default())
                .unwrap_or_default();
            info!(
                status = response.status,
                url = %response.url,
                started = %started,
                "request succeeded: {:.200}",
                summary
            );
        }
        Ok(response) => {
            warn!(status = response.status, url = %response.url, "request returned a non-success status");
        }
        Err(e) => {
            error!("request failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
