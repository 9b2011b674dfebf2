//! Shared error type across splyce crates.

use thiserror::Error;

/// Stable error codes, used in logs and asserted on by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Sample line could not be parsed.
    BadSample,
    /// Config file present but invalid.
    BadConfig,
    /// A listening socket could not be acquired.
    BindFailed,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadSample => "BAD_SAMPLE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::BindFailed => "BIND_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SplyceError>;

/// Unified error type used by core and bridge.
#[derive(Debug, Error)]
pub enum SplyceError {
    #[error("bad sample: {0}")]
    BadSample(String),
    #[error("bad config: {0}")]
    Config(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SplyceError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SplyceError::BadSample(_) => ErrorCode::BadSample,
            SplyceError::Config(_) => ErrorCode::BadConfig,
            SplyceError::Bind(_) => ErrorCode::BindFailed,
            SplyceError::Internal(_) => ErrorCode::Internal,
        }
    }
}
