//! SPTrans error types

use thiserror::Error;

/// Errors that can occur while talking to the Olho Vivo API
#[derive(Debug, Error)]
pub enum SpTransError {
    /// The provider rejected the configured API token at login
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The session was rejected again right after re-authenticating
    #[error("Session rejected by the provider after re-authentication")]
    SessionRejected,

    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The provider answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the provider's response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl SpTransError {
    /// Returns true if a later identical call could plausibly succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }

    /// Returns true if the configured token itself was rejected
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}
