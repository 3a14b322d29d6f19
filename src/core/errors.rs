//! Error types for Intento API operations

use thiserror::Error;

/// Failure reported by the Intento API through its HTTP status code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiError {
    /// 400: the chosen provider rejected the request
    #[error("intento: provider-related error")]
    ProviderRelated,

    /// 401
    #[error("intento: auth key is missing")]
    AuthKeyMissing,

    /// 403
    #[error("intento: auth key is invalid")]
    AuthKeyInvalid,

    /// 404
    #[error("intento: intent/provider not found")]
    NotFound,

    /// 413
    #[error("intento: capabilities mismatch for the chosen provider")]
    CapabilitiesMismatch,

    /// 429
    #[error("intento: API rate limit exceeded")]
    RateLimitExceeded,

    /// 500
    #[error("intento: internal error")]
    Internal,

    /// 501
    #[error("intento: not implemented")]
    NotImplemented,

    /// 502
    #[error("intento: gateway timeout")]
    GatewayTimeout,

    /// Any other non-2xx status
    #[error("intento: unexpected status code {0}")]
    UnexpectedStatus(u16),
}

impl ApiError {
    /// Classify an HTTP status code.
    ///
    /// Every 2xx code is a success; the documented error codes map to their
    /// own variant and everything else falls into [`ApiError::UnexpectedStatus`].
    pub fn from_status(status: u16) -> std::result::Result<(), ApiError> {
        match status {
            200..=299 => Ok(()),
            400 => Err(ApiError::ProviderRelated),
            401 => Err(ApiError::AuthKeyMissing),
            403 => Err(ApiError::AuthKeyInvalid),
            404 => Err(ApiError::NotFound),
            413 => Err(ApiError::CapabilitiesMismatch),
            429 => Err(ApiError::RateLimitExceeded),
            500 => Err(ApiError::Internal),
            501 => Err(ApiError::NotImplemented),
            502 => Err(ApiError::GatewayTimeout),
            other => Err(ApiError::UnexpectedStatus(other)),
        }
    }
}

/// Error raised by a transport while talking to the network
#[derive(Error, Debug)]
pub enum TransportError {
    /// Reqwest error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("{message}")]
    Other {
        message: String,
    },
}

impl TransportError {
    /// Build a transport error from a plain message
    pub fn other(message: impl Into<String>) -> Self {
        TransportError::Other {
            message: message.into(),
        }
    }
}

/// Errors returned by client operations
#[derive(Error, Debug)]
pub enum Error {
    /// Request body could not be serialized
    #[error("encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Request could not be sent or its body could not be read
    #[error("send request: {0}")]
    Transport(#[from] TransportError),

    /// API answered with a non-success status
    #[error("check http status code: {0}")]
    Status(#[from] ApiError),

    /// Response body did not match the expected shape
    #[error("decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Configuration error
    #[error("configuration: {message}")]
    Config {
        message: String,
    },
}

impl Error {
    /// The API error kind, when the call failed on its status code
    pub fn api_error(&self) -> Option<ApiError> {
        match self {
            Error::Status(kind) => Some(*kind),
            _ => None,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;
