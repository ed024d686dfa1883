//! # Elections API Requester
//!
//! A blocking client around `reqwest` for the AP elections API. Each call is a
//! single GET round trip:
//!
//! 1. the caller's query parameters are copied, with `apiKey` resolved from
//!    the call or the configuration and `format` forced to `json`;
//! 2. the request goes to `<base_url><path>`;
//! 3. a 2xx body is parsed as JSON and handed to the [`Recorder`];
//! 4. a 403 body is parsed as XML and its `Message` is written to the
//!    diagnostic stream;
//! 5. the response is returned whatever its status.
//!
//! There are no retries and no timeouts beyond `reqwest`'s defaults.

use std::io::{self, Write};
use std::sync::Mutex;

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

use super::error_body::extract_error_message;
use crate::configs::config_api::ElexConfig;
use crate::errors::{ElexError, ElexResult};
use crate::recorders::Recorder;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apiKey";
/// Query parameter selecting the response format.
pub const FORMAT_PARAM: &str = "format";

/// The outcome of one API call, whatever its status.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
    /// The effective request URL, query string included.
    pub url: String,
    /// The headers returned by the server.
    pub headers: HeaderMap,
    /// The raw response body.
    pub body: Vec<u8>,
    /// The parsed JSON body. Only set for 2xx responses.
    pub data: Option<Value>,
}

impl ApiResponse {
    /// The raw body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The parsed JSON body, if the call succeeded.
    pub fn json(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

/// Picks the key for a request: a non-empty `apiKey` parameter, else the
/// non-empty configured key.
pub fn resolve_api_key<'a>(params: &[(&'a str, &'a str)], config: &'a ElexConfig) -> Option<&'a str> {
    params
        .iter()
        .rev()
        .find(|(name, _)| *name == API_KEY_PARAM)
        .map(|(_, value)| *value)
        .filter(|value| !value.is_empty())
        .or_else(|| config.configured_key())
}

/// Builds the outgoing query: caller params in order, then `apiKey`, then `format=json`.
pub fn build_query(params: &[(&str, &str)], api_key: &str) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = params
        .iter()
        .filter(|(name, _)| *name != API_KEY_PARAM && *name != FORMAT_PARAM)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    query.push((API_KEY_PARAM.to_string(), api_key.to_string()));
    query.push((FORMAT_PARAM.to_string(), "json".to_string()));
    query
}

/// The line written to the diagnostic stream on a 403.
pub fn diagnostic_line(message: &str, url: &str) -> String {
    format!("ELEX ERROR: {} (url: {})", message, url)
}

/// A blocking client for the elections API.
pub struct ApiClient {
    /// The underlying blocking HTTP client.
    inner: Client,
    /// Base URL and process-wide API key.
    config: ElexConfig,
    /// Receives every successful payload.
    recorder: Recorder,
    /// Where 403 diagnostics are written. Standard error unless overridden.
    diagnostics: Mutex<Box<dyn Write + Send>>,
}

impl ApiClient {
    /// Creates a client for `config` that records through `recorder`.
    pub fn new(config: ElexConfig, recorder: Recorder) -> Self {
        Self {
            inner: Client::new(),
            config,
            recorder,
            diagnostics: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Sends 403 diagnostics to `writer` instead of standard error.
    pub fn with_diagnostics(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.diagnostics = Mutex::new(writer);
        self
    }

    pub fn config(&self) -> &ElexConfig {
        &self.config
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Performs `GET <base_url><path>` with `params` plus `apiKey` and `format=json`.
    ///
    /// # Errors
    /// - [`ElexError::MissingApiKey`] before any network traffic when no key resolves.
    /// - [`ElexError::Http`] on transport failures.
    /// - [`ElexError::Json`] when a 2xx body is not JSON.
    /// - Recording errors, even though the HTTP exchange itself succeeded.
    /// - [`ElexError::Xml`] / [`ElexError::MissingErrorMessage`] when a 403 body
    ///   cannot be turned into a diagnostic.
    ///
    /// Any other status, including 404 and 5xx, is returned as `Ok`.
    pub fn api_request(&self, path: &str, params: &[(&str, &str)]) -> ElexResult<ApiResponse> {
        let api_key = resolve_api_key(params, &self.config).ok_or(ElexError::MissingApiKey)?;
        let query = build_query(params, api_key);
        let endpoint = format!("{}{}", self.config.base_url, path);

        tracing::debug!(%endpoint, params = query.len(), "sending elections API request");
        let response = self.inner.get(&endpoint).query(&query).send()?;

        let status = response.status();
        let url = response.url().to_string();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "elections API response");

        let data = if status.is_success() {
            let payload: Value = serde_json::from_slice(&body)?;
            self.recorder.record(&payload)?;
            Some(payload)
        } else {
            None
        };

        if status == StatusCode::FORBIDDEN {
            let message = extract_error_message(&body)?;
            self.write_diagnostic(&diagnostic_line(&message, &url))?;
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            success: status.is_success(),
            url,
            headers,
            body,
            data,
        })
    }

    fn write_diagnostic(&self, line: &str) -> ElexResult<()> {
        let mut writer = self
            .diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("recorder", &self.recorder)
            .finish()
    }
}
