//! CivicStorm client library.
//!
//! Auth and report sessions over in-memory stores, with the current user
//! persisted to durable key-value storage.
//!
//! # Layout
//!
//! - [`db`] - In-memory user and report stores plus fixture seed data
//! - [`storage`] - Durable key-value storage for the session record
//! - [`services`] - Auth session, report session and notifications
//! - [`state`] - Composition root wiring stores into sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod filters;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
