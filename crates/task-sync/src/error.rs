//! API error handling
//!
//! Every failed request surfaces as one `ApiError` carrying a human-readable
//! message. The variant names the intent that failed, the inner `Failure`
//! says how it failed.

use thiserror::Error;

/// How a request failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The request could not be sent or no response came back
    #[error("{0}")]
    Transport(String),

    /// The server answered outside the 2xx range
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx body that had to be parsed was not the expected shape
    #[error("{0}")]
    Decode(String),
}

/// Errors raised by the task API client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Load(Failure),

    #[error("{0}")]
    Save(Failure),

    #[error("{0}")]
    Toggle(Failure),

    #[error("{0}")]
    Delete(Failure),
}

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn failure(&self) -> &Failure {
        match self {
            ApiError::Load(f) | ApiError::Save(f) | ApiError::Toggle(f) | ApiError::Delete(f) => f,
        }
    }

    /// True when the request never reached the server or no response came back
    pub fn is_transport(&self) -> bool {
        matches!(self.failure(), Failure::Transport(_))
    }

    /// Message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self.failure() {
            Failure::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
