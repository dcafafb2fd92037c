//! Session services.
//!
//! # Services
//!
//! - `auth` - Current-user session: login, signup, logout, restore
//! - `reports` - Report creation, queries and status triage
//! - `notify` - User-visible notifications emitted by both sessions

pub mod auth;
pub mod notify;
pub mod reports;

pub use auth::{AuthError, AuthSession, CredentialVerifier, DemoPasswordVerifier};
pub use notify::{Notification, NotificationLog, Notifier, Severity};
pub use reports::{ReportError, ReportSession};
