//! Domain models for the client.

pub mod report;
pub mod session;
pub mod user;

pub use report::{NewReport, Report, ReportFilter, ReportStats, ValidationError, ValidationErrors};
pub use session::{CurrentUser, keys};
pub use user::User;
