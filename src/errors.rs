/// Error types for ecochecker
///
/// `EcoError` is what the public API returns. `ProviderError` never leaves a
/// provider adapter: adapters log it and answer with synthetic data instead.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("Aggregation failed: {0}")]
    Aggregation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EcoError {
    /// Whether the error came out of the check pipeline itself
    pub fn is_aggregation(&self) -> bool {
        matches!(self, EcoError::Aggregation(_))
    }
}

pub type EcoResult<T> = Result<T, EcoError>;

/// Failure of a single outbound provider call
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    NetworkError(String),
    Timeout,
    HttpStatus(u16),
    InvalidResponse(String),
    EmptyBody,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ProviderError::Timeout => write!(f, "Request timeout"),
            ProviderError::HttpStatus(status) => write!(f, "HTTP {}", status),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ProviderError::EmptyBody => write!(f, "Empty response body"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::HttpStatus(status.as_u16())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}
