//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use hamster_core::{ApiError, CoreError, SaveError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or form validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend could not be reached in time.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something unexpected.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Protocol(_) => 76,    // EX_PROTOCOL
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<&ApiError> for CliError {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Timeout | ApiError::Network { .. } => Self::Unavailable(err.to_string()),
            ApiError::InvalidResponse { .. } => Self::Protocol(err.to_string()),
            ApiError::Configuration { message } => Self::Config(message.clone()),
            ApiError::NotFound { .. } | ApiError::Rejected { .. } => Self::Core(err.to_string()),
        }
    }
}

impl From<&CoreError> for CliError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Api(api) => api.into(),
            CoreError::Save(SaveError::MissingCategory | SaveError::InvalidDraft(_))
            | CoreError::Validation(_) => Self::Arguments(err.to_string()),
            CoreError::Save(
                SaveError::CategoryCreateFailed { source, .. } | SaveError::PersistFailed(source),
            ) => match Self::from(source) {
                Self::Core(_) => Self::Core(err.to_string()),
                other => other,
            },
            CoreError::Internal(msg) => Self::Core(msg.clone()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        cli.exit_code()
    } else if let Some(core) = err.downcast_ref::<CoreError>() {
        CliError::from(core).exit_code()
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        74
    } else {
        1
    }
}
