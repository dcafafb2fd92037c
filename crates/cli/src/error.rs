//! CLI error type.
//!
//! Wraps the service errors and adds the presentation-layer checks
//! (sign-in and admin gating, argument parsing).

use thiserror::Error;

use civicstorm_client::config::ConfigError;
use civicstorm_client::services::{AuthError, ReportError};
use civicstorm_core::{CategoryError, ReportCategory, ReportId, StatusParseError};

/// Application-level error type for the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Report operation failed.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Command needs a signed-in user.
    #[error("Unauthorized: please log in first")]
    Unauthorized,

    /// Command needs an administrator.
    #[error("Forbidden: {0} requires an admin account")]
    Forbidden(&'static str),

    /// Report lookup failed.
    #[error("Not found: {0}")]
    NotFound(ReportId),

    /// Bad argument value.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Output encoding failed.
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CategoryError> for AppError {
    fn from(e: CategoryError) -> Self {
        match &e {
            CategoryError::UnknownCategory { kind, .. } => {
                let allowed: Vec<&str> = ReportCategory::all_for(*kind)
                    .into_iter()
                    .map(ReportCategory::as_str)
                    .collect();
                Self::BadRequest(format!("{e}; choose one of: {}", allowed.join(", ")))
            }
            CategoryError::UnknownKind(_) => Self::BadRequest(e.to_string()),
        }
    }
}

impl From<StatusParseError> for AppError {
    fn from(e: StatusParseError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
