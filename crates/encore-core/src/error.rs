//! Shared error type across Encore crates.

use thiserror::Error;

/// Stable error codes for tooling and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config file could not be parsed or failed validation.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Route pattern failed to compile.
    InvalidPattern,
    /// Two rules could select the same path with equal specificity.
    AmbiguousRule,
    /// Role string not recognised.
    UnknownRole,
    /// Feature string not recognised.
    UnknownFeature,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and check output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::InvalidPattern => "INVALID_PATTERN",
            ErrorCode::AmbiguousRule => "AMBIGUOUS_RULE",
            ErrorCode::UnknownRole => "UNKNOWN_ROLE",
            ErrorCode::UnknownFeature => "UNKNOWN_FEATURE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, EncoreError>;

/// Unified error type used by core and policy.
///
/// Only configuration loading and compilation can fail. Access decisions
/// themselves are total and never produce an error.
#[derive(Debug, Error)]
pub enum EncoreError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
    #[error("ambiguous route rule: {0}")]
    AmbiguousRule(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown feature: {0}")]
    UnknownFeature(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl EncoreError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            EncoreError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            EncoreError::InvalidPattern { .. } => ErrorCode::InvalidPattern,
            EncoreError::AmbiguousRule(_) => ErrorCode::AmbiguousRule,
            EncoreError::UnknownRole(_) => ErrorCode::UnknownRole,
            EncoreError::UnknownFeature(_) => ErrorCode::UnknownFeature,
            EncoreError::Internal(_) => ErrorCode::Internal,
        }
    }
}
