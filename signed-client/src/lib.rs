//! Private signed-request client for the AbleCloud purifier API
//!
//! Every call to the vendor cloud is a JSON `POST` carrying an envelope of
//! `X-Zc-*` headers. One of them, `X-Zc-User-Signature`, is a SHA-1 digest
//! over the timeout, timestamp, nonce and session token. This crate builds
//! that envelope and sends it; the typed operations live in `pure-air-api`.

mod config;
mod error;
pub mod signature;

pub use config::{ClientConfig, Protocol, DEFAULT_ENDPOINT};
pub use error::ClientError;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::signature::{generate_nonce, sign, unix_timestamp, REQUEST_TIMEOUT};

/// Exact header names of the signed envelope
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_LENGTH: &str = "X-Zc-Content-Length";
    pub const MAJOR_DOMAIN: &str = "X-Zc-Major-Domain";
    pub const SUB_DOMAIN: &str = "X-Zc-Sub-Domain";
    pub const TIMESTAMP: &str = "X-Zc-Timestamp";
    pub const TIMEOUT: &str = "X-Zc-Timeout";
    pub const NONCE: &str = "X-Zc-Nonce";
    pub const USER_ID: &str = "X-Zc-User-Id";
    pub const USER_SIGNATURE: &str = "X-Zc-User-Signature";
    pub const DEVICE_OS: &str = "X-Zc-Device-Os";
    pub const OPERATION_TYPE: &str = "X-Zc-Operation-Type";
    pub const ACCESS_MODE: &str = "X-Zc-Access-Mode";
}

/// Request and response fields replaced by a placeholder in debug logs
const REDACTED_FIELDS: &[&str] = &["password", "token", "dcpToken"];

/// Session credentials used to sign and enrich each request
///
/// `user_id` is `"0"` and every other field is empty until a login
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: String,
    pub token: String,
    pub dcp_token: String,
    pub dcp_uid: String,
}

impl Credentials {
    /// A session holding a non-empty token
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            user_id: "0".to_string(),
            token: String::new(),
            dcp_token: String::new(),
            dcp_uid: String::new(),
        }
    }
}

/// A fully built request, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub url: String,
    /// Serialized JSON payload, including the injected dcp fields
    pub body: String,
    pub headers: BTreeMap<String, String>,
    log_body: String,
}

impl SignedRequest {
    /// Look up a header by name, ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response returned to the caller for inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedResponse {
    pub status: u16,
    pub body: String,
}

impl SignedResponse {
    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// A minimal client for the signed AbleCloud request scheme
///
/// Each instance owns its own HTTP agent; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct SignedClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl SignedClient {
    /// Create a client for the production endpoint
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.timeout_connect(timeout);
        }
        if let Some(timeout) = config.read_timeout {
            builder = builder.timeout_read(timeout);
        }

        Self {
            agent: builder.build(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a signed request with a fresh nonce and the current time
    ///
    /// # Arguments
    /// * `path` - API-relative path, e.g. `/zc-bind/v1/listDevicesExt`
    /// * `payload` - Caller fields; `dcpMarket`, `dcpUid` and `dcpToken` are added
    /// * `credentials` - Current session
    /// * `extra_headers` - Applied after the computed headers, replacing entries
    ///   whose name matches ignoring ASCII case
    pub fn build(
        &self,
        path: &str,
        payload: Map<String, Value>,
        credentials: &Credentials,
        extra_headers: &[(&str, &str)],
    ) -> Result<SignedRequest, ClientError> {
        self.build_with(
            path,
            payload,
            credentials,
            extra_headers,
            &generate_nonce(),
            unix_timestamp(),
        )
    }

    /// Build a signed request from an explicit nonce and timestamp
    pub fn build_with(
        &self,
        path: &str,
        mut payload: Map<String, Value>,
        credentials: &Credentials,
        extra_headers: &[(&str, &str)],
        nonce: &str,
        timestamp: u64,
    ) -> Result<SignedRequest, ClientError> {
        let protocol = &self.config.protocol;

        payload.insert("dcpMarket".to_string(), Value::String(protocol.market.clone()));
        payload.insert("dcpUid".to_string(), Value::String(credentials.dcp_uid.clone()));
        payload.insert("dcpToken".to_string(), Value::String(credentials.dcp_token.clone()));

        let body = serde_json::to_string(&payload)?;
        let log_body = redacted(payload).to_string();

        let timestamp = timestamp.to_string();
        let signature = sign(REQUEST_TIMEOUT, &timestamp, nonce, &credentials.token);

        let mut envelope = BTreeMap::new();
        envelope.insert(headers::CONTENT_TYPE.to_string(), protocol.content_type.clone());
        // Byte length, not character count
        envelope.insert(headers::CONTENT_LENGTH.to_string(), body.len().to_string());
        envelope.insert(headers::MAJOR_DOMAIN.to_string(), protocol.major_domain.clone());
        envelope.insert(headers::SUB_DOMAIN.to_string(), protocol.sub_domain.clone());
        envelope.insert(headers::TIMESTAMP.to_string(), timestamp);
        envelope.insert(headers::TIMEOUT.to_string(), REQUEST_TIMEOUT.to_string());
        envelope.insert(headers::NONCE.to_string(), nonce.to_string());
        envelope.insert(headers::USER_ID.to_string(), credentials.user_id.clone());
        envelope.insert(headers::USER_SIGNATURE.to_string(), signature);
        envelope.insert(headers::DEVICE_OS.to_string(), protocol.device_os.clone());
        envelope.insert(headers::OPERATION_TYPE.to_string(), protocol.operation_type.clone());

        for (name, value) in extra_headers {
            // Header names are case-insensitive on the wire
            envelope.retain(|key: &String, _| !key.eq_ignore_ascii_case(name));
            envelope.insert((*name).to_string(), (*value).to_string());
        }

        Ok(SignedRequest {
            url: format!("{}{}", self.config.endpoint, path),
            body,
            headers: envelope,
            log_body,
        })
    }

    /// Send a previously built request
    ///
    /// Non-2xx responses are returned as [`ClientError::HttpStatus`]. Nothing
    /// is retried.
    pub fn send(&self, request: &SignedRequest) -> Result<SignedResponse, ClientError> {
        tracing::debug!(
            url = %request.url,
            body = %request.log_body,
            headers = ?request.headers.keys().collect::<Vec<_>>(),
            "sending signed request"
        );

        let mut call = self.agent.post(&request.url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let response = call.send_string(&request.body)?;
        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        tracing::debug!(status, body = %redacted_body(&body), "received response");

        if !(200..300).contains(&status) {
            return Err(ClientError::HttpStatus { status, body });
        }

        Ok(SignedResponse { status, body })
    }

    /// Build, sign and send in one step
    pub fn post(
        &self,
        path: &str,
        payload: Map<String, Value>,
        credentials: &Credentials,
        extra_headers: &[(&str, &str)],
    ) -> Result<SignedResponse, ClientError> {
        let request = self.build(path, payload, credentials, extra_headers)?;
        self.send(&request)
    }
}

impl Default for SignedClient {
    fn default() -> Self {
        Self::new()
    }
}

fn redacted(mut payload: Map<String, Value>) -> Value {
    for field in REDACTED_FIELDS {
        if let Some(value) = payload.get_mut(*field) {
            *value = Value::String("***".to_string());
        }
    }
    Value::Object(payload)
}

fn redacted_body(body: &str) -> String {
    match serde_json::from_str(body) {
        Ok(Value::Object(map)) => redacted(map).to_string(),
        _ => body.to_string(),
    }
}
