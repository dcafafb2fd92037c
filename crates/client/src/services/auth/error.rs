//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong password, unknown email, or an email that does not parse.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Another account already uses this email (ignoring case).
    #[error("email already in use")]
    EmailInUse,

    /// Invalid email format at signup.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] civicstorm_core::EmailError),

    /// Display name is blank.
    #[error("name cannot be empty")]
    InvalidName,
}
