//! Error types for SeekIO
//!
//! Every failure the engine can report is a caller-input error detected
//! before any scheduling computation begins; there is no retryable class.

use thiserror::Error;

/// Common result type for SeekIO operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the scheduling engine
#[derive(Debug, Error)]
pub enum Error {
    // Input validation errors
    #[error("request queue is empty")]
    EmptyQueue,

    #[error("invalid request token: {token:?}")]
    InvalidRequestToken { token: String },

    #[error("position {position} outside disk range 0..{disk_size}")]
    PositionOutOfRange { position: u32, disk_size: u32 },

    #[error("policy {policy} requires a disk size")]
    DiskSizeRequired { policy: &'static str },

    // Policy selection errors
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),
}

impl Error {
    /// Create an invalid token error
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidRequestToken {
            token: token.into(),
        }
    }

    /// Check if this error came from the request input rather than the
    /// policy selector
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyQueue
                | Self::InvalidRequestToken { .. }
                | Self::PositionOutOfRange { .. }
                | Self::DiskSizeRequired { .. }
        )
    }
}
