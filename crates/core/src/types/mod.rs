//! Core types for CivicStorm.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod location;
pub mod status;

pub use category::{CategoryError, HazardType, IssueType, ReportCategory, ReportKind};
pub use email::{Email, EmailError};
pub use id::*;
pub use location::{KNOWN_LOCATIONS, is_known_location};
pub use status::{ReportStatus, StatusParseError};
