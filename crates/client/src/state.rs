//! Composition root.
//!
//! Owns the stores and wires them into the auth and report sessions. The two
//! sessions share one [`CurrentUser`] slot.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::db::{ReportStore, UserStore};
use crate::models::CurrentUser;
use crate::services::auth::{AuthSession, CredentialVerifier, DemoPasswordVerifier};
use crate::services::notify::Notifier;
use crate::services::reports::ReportSession;
use crate::storage::{FileStorage, KeyValueStorage};

/// Application state for one client instance.
pub struct AppState<V = DemoPasswordVerifier> {
    auth: AuthSession<V>,
    reports: ReportSession,
}

impl AppState<DemoPasswordVerifier> {
    /// Seeded state backed by file storage under `config.data_dir`, using the
    /// demo verifier. The previous session, if any, is restored.
    #[must_use]
    pub fn from_config(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        let verifier =
            DemoPasswordVerifier::new(config.demo_password.clone(), config.auth_latency);

        let mut state = Self::new(
            UserStore::seeded(),
            ReportStore::seeded(),
            storage,
            verifier,
            notifier,
        );
        state.auth.restore();
        state
    }
}

impl<V: CredentialVerifier> AppState<V> {
    /// Wire explicit stores and dependencies. The session starts signed out.
    #[must_use]
    pub fn new(
        users: UserStore,
        reports: ReportStore,
        storage: Arc<dyn KeyValueStorage>,
        verifier: V,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let current = CurrentUser::new();
        Self {
            auth: AuthSession::new(users, current.clone(), storage, verifier, notifier.clone()),
            reports: ReportSession::new(reports, current, notifier),
        }
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthSession<V> {
        &self.auth
    }

    pub const fn auth_mut(&mut self) -> &mut AuthSession<V> {
        &mut self.auth
    }

    #[must_use]
    pub const fn reports(&self) -> &ReportSession {
        &self.reports
    }

    pub const fn reports_mut(&mut self) -> &mut ReportSession {
        &mut self.reports
    }
}
