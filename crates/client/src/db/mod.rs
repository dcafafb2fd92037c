//! In-memory stores.
//!
//! # Stores
//!
//! - `users` - Known accounts, seeded from fixtures, grown by signup
//! - `reports` - Reports ordered most recent first
//!
//! Both stores are plain owned values. The composition root in
//! [`crate::state`] creates them and hands them to the sessions; nothing here
//! is global.

pub mod fixtures;
pub mod reports;
pub mod users;

use thiserror::Error;

pub use reports::ReportStore;
pub use users::UserStore;

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A unique constraint would be violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No record with the given key.
    #[error("not found: {0}")]
    NotFound(String),
}
