//! Error types for the signed-request client

use thiserror::Error;

/// Errors that can occur while building, sending or reading a signed request
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or connection failure before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// JSON serialization of the payload or parsing of the response failed
    #[error("JSON error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Parse(error.to_string())
    }
}

impl From<ureq::Error> for ClientError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, response) => ClientError::HttpStatus {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: ClientError = json_error.into();
        assert!(matches!(error, ClientError::Parse(_)));
    }

    #[test]
    fn test_error_display() {
        let transport = ClientError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", transport), "Transport error: connection refused");

        let status = ClientError::HttpStatus {
            status: 401,
            body: "denied".to_string(),
        };
        assert_eq!(format!("{}", status), "HTTP status 401: denied");
    }
}
