//! CivicStorm Core - Shared types library.
//!
//! This crate provides common types used across all CivicStorm components:
//! - `client` - Auth and report sessions over the in-memory stores
//! - `cli` - Command-line front end for submitting and triaging reports
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no session state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, statuses and report categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
