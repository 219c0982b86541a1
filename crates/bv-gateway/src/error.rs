use thiserror::Error;

/// Why a single provider attempt produced no usable text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider misconfigured: {message}")]
    Configuration { message: String },
    #[error("request transport failed: {message}")]
    Transport { message: String },
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unreadable provider response: {message}")]
    Payload { message: String },
    #[error("degenerate result: {reason}")]
    Degenerate { reason: String },
}

impl ProviderError {
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload { message: message.into() }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate { reason: reason.into() }
    }
}
