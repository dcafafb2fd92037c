//! Report session error types.

use thiserror::Error;

use civicstorm_core::ReportId;

use crate::models::ValidationErrors;

/// Errors that can occur during report operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// No user is signed in.
    #[error("you must be logged in to create a report")]
    Unauthenticated,

    /// No report with this ID.
    #[error("report not found: {0}")]
    NotFound(ReportId),

    /// The submission failed field validation.
    #[error("invalid report: {0}")]
    Invalid(#[from] ValidationErrors),
}
