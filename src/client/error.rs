//! Error types for the Polly client

use compact_str::CompactString;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure of a single request against the Polly API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout or a malformed HTTP exchange
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {endpoint}: {body}")]
    Http {
        endpoint: CompactString,
        status: StatusCode,
        body: CompactString,
    },

    /// The body was not valid JSON for the expected shape
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: CompactString,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL: {url}")]
    InvalidUrl { url: CompactString },

    #[error("invalid configuration for {field}: {message}")]
    ConfigValidation {
        field: CompactString,
        message: CompactString,
    },
}

impl ClientError {
    pub fn http(endpoint: impl Into<CompactString>, status: StatusCode, body: &str) -> Self {
        Self::Http { endpoint: endpoint.into(), status, body: body.into() }
    }

    pub fn decode(endpoint: impl Into<CompactString>, source: serde_json::Error) -> Self {
        Self::Decode { endpoint: endpoint.into(), source }
    }

    pub fn invalid_url(url: impl Into<CompactString>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn config_validation(
        field: impl Into<CompactString>,
        message: impl Into<CompactString>,
    ) -> Self {
        Self::ConfigValidation { field: field.into(), message: message.into() }
    }

    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Short, stable name of the failure kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "transport_error",
            ClientError::Http { .. } => "http_error",
            ClientError::Decode { .. } => "decode_error",
            ClientError::InvalidUrl { .. } => "invalid_url",
            ClientError::ConfigValidation { .. } => "config_error",
        }
    }
}
