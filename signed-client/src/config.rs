//! Client configuration and the static protocol profile

use std::time::Duration;

/// Production AbleCloud router for the European purifier fleet
pub const DEFAULT_ENDPOINT: &str = "https://eurouter.ablecloud.cn:9005";

/// Static values the vendor app sends with every request
///
/// The defaults match the Rowenta Android app. They are not secrets, but the
/// server rejects requests whose domain pair does not match the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protocol {
    pub content_type: String,
    pub major_domain: String,
    pub sub_domain: String,
    pub device_os: String,
    pub operation_type: String,
    /// Injected into every payload as `dcpMarket`
    pub market: String,
}

impl Default for Protocol {
    fn default() -> Self {
        Self {
            content_type: "application/x-zc-object".to_string(),
            major_domain: "groupeseb".to_string(),
            sub_domain: "rowentaxl".to_string(),
            device_os: "android".to_string(),
            operation_type: "app".to_string(),
            market: "GS_US".to_string(),
        }
    }
}

/// Configuration for a [`SignedClient`](crate::SignedClient)
///
/// Timeouts default to `None`, leaving the transport's own behaviour in
/// place. `X-Zc-Timeout` is unrelated and always sent as `300`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    pub protocol: Protocol,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            read_timeout: None,
            protocol: Protocol::default(),
        }
    }

    /// Point the client at another base URL (a mock server, a different region)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
