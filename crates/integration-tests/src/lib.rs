//! Integration tests for CivicStorm.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p civicstorm-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_session` - Login, signup, logout and session restore end to end
//! - `report_session` - Report submission, queries and triage through `AppState`
//!
//! This library holds the shared fixtures used by the test files.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use civicstorm_client::db::{ReportStore, UserStore};
use civicstorm_client::services::{DemoPasswordVerifier, NotificationLog};
use civicstorm_client::state::AppState;
use civicstorm_client::storage::MemoryStorage;

/// Password shared by the seeded accounts in tests.
pub const DEMO_PASSWORD: &str = "password";

/// A seeded client wired to in-memory storage and a recording notifier.
pub struct TestContext {
    pub state: AppState,
    pub storage: Arc<MemoryStorage>,
    pub log: Arc<NotificationLog>,
}

impl TestContext {
    /// Fresh seeded state with its own empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Fresh seeded state over existing storage, as if the process restarted.
    /// Any saved session is restored.
    #[must_use]
    pub fn with_storage(storage: Arc<MemoryStorage>) -> Self {
        let log = Arc::new(NotificationLog::new());
        let mut state = AppState::new(
            UserStore::seeded(),
            ReportStore::seeded(),
            storage.clone(),
            DemoPasswordVerifier::new(SecretString::from(DEMO_PASSWORD), Duration::ZERO),
            log.clone(),
        );
        state.auth_mut().restore();
        Self {
            state,
            storage,
            log,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a password literal.
#[must_use]
pub fn password(s: &str) -> SecretString {
    SecretString::from(s)
}

/// Titles in iteration order.
pub fn titles<'a>(reports: impl Iterator<Item = &'a civicstorm_client::models::Report>) -> Vec<String> {
    reports.map(|report| report.title.clone()).collect()
}
