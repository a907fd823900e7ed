//! CLI error types.

use std::fmt;

use error_stack::Report;
use verify_sdk_common::VerifyError;

#[derive(Debug)]
pub enum CliError {
    /// Configuration file or settings error
    Config(String),
    /// The remote service refused to issue a token
    Rejected(String),
    /// Transport, signature or decode failure
    Verify(String),
    /// IO error
    Io(std::io::Error),
    /// JSON rendering error
    Json(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Rejected(msg) => write!(f, "Token rejected: {}", msg),
            CliError::Verify(msg) => write!(f, "Verify error: {}", msg),
            CliError::Io(err) => write!(f, "IO error: {}", err),
            CliError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err.to_string())
    }
}

impl From<Report<VerifyError>> for CliError {
    fn from(report: Report<VerifyError>) -> Self {
        match report.current_context() {
            VerifyError::Configuration { message } => CliError::Config(message.clone()),
            VerifyError::RemoteRejection { message, .. } => CliError::Rejected(message.clone()),
            _ => CliError::Verify(format!("{report:#}")),
        }
    }
}
