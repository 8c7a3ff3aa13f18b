//! Image generation error types

use thiserror::Error;

/// Errors returned by image generation
#[derive(Error, Debug, Clone)]
pub enum GenerateError {
    /// Request could not be built (bad base URL or prompt)
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),

    /// Network-level failure (connect error, broken transfer)
    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded the client timeout
    #[error("Generation request timed out")]
    Timeout,

    /// Service rate limit hit
    #[error("Generation service rate limit exceeded")]
    RateLimited,

    /// Service answered with an error status
    #[error("Generation service error {status}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        message: String,
    },
}

impl GenerateError {
    /// Whether a retry can reasonably succeed.
    ///
    /// Server-side errors and transport failures are transient; client
    /// errors and rate limits are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::RequestFailed(_) | Self::Timeout => true,
            Self::ApiError { status, .. } => *status >= 500,
            Self::InvalidRequest(_) | Self::RateLimited => false,
        }
    }
}
