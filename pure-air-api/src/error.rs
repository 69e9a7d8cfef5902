use signed_client::ClientError;
use thiserror::Error;

/// High-level API errors for purifier operations
///
/// Nothing here is retried or classified as transient; callers that want a
/// retry policy wrap the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The cloud answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A key the operation relies on is absent from the response
    ///
    /// Most commonly raised by `connect` when the login reply carries no
    /// token, which is how the cloud reports bad credentials.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// An operation other than `connect` was called without a session
    #[error("Not authenticated: call connect first")]
    NotAuthenticated,

    /// A request type did not serialize to a JSON object
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl ApiError {
    pub(crate) fn missing_field(path: &str) -> Self {
        Self::MissingField(path.to_string())
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Transport(msg) => ApiError::Transport(msg),
            ClientError::HttpStatus { status, body } => ApiError::HttpStatus { status, body },
            ClientError::Parse(msg) => ApiError::ParseError(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::ParseError(error.to_string())
    }
}
