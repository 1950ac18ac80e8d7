//! Error types for the readme-gen CLI.
//!
//! Uses thiserror for derive macros. Validation problems with a single answer
//! never show up here: the prompter recovers from those by asking again.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for readme-gen operations.
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// User provided invalid arguments or the run cannot continue.
    #[error("{0}")]
    UserError(String),

    /// Standard input closed before the session finished.
    #[error("input closed while waiting for: {0}")]
    InputClosed(String),

    /// Configuration file could not be read or failed validation.
    #[error("config error: {0}")]
    ConfigError(String),

    /// A file could not be written.
    #[error("failed to write '{}': {message}", .path.display())]
    WriteError { path: PathBuf, message: String },

    /// Self-test scenarios failed.
    #[error("{failed} of {total} self-test scenarios failed")]
    SelfTestFailure { failed: usize, total: usize },
}

impl ReadmeError {
    /// Build a `WriteError` for `path` from any displayable cause.
    pub fn write(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        ReadmeError::WriteError {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadmeError::UserError(_) => exit_codes::USER_ERROR,
            ReadmeError::InputClosed(_) => exit_codes::USER_ERROR,
            ReadmeError::ConfigError(_) => exit_codes::USER_ERROR,
            ReadmeError::WriteError { .. } => exit_codes::FILESYSTEM_FAILURE,
            ReadmeError::SelfTestFailure { .. } => exit_codes::SELF_TEST_FAILURE,
        }
    }
}

/// Result type alias for readme-gen operations.
pub type Result<T> = std::result::Result<T, ReadmeError>;
