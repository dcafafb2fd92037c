//! Authentication session.
//!
//! Tracks at most one signed-in user and mirrors it to durable storage so
//! the session survives a restart.

mod error;
mod verifier;

pub use error::AuthError;
pub use verifier::{CredentialVerifier, DemoPasswordVerifier};

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{info, instrument, warn};

use civicstorm_core::Email;

use crate::db::{RepositoryError, UserStore};
use crate::models::{CurrentUser, User, keys};
use crate::services::notify::{Notification, Notifier};
use crate::storage::{self, KeyValueStorage};

/// Authentication session over the user store.
///
/// Writes the shared [`CurrentUser`] slot that the report session reads.
pub struct AuthSession<V> {
    users: UserStore,
    current: CurrentUser,
    storage: Arc<dyn KeyValueStorage>,
    verifier: V,
    notifier: Arc<dyn Notifier>,
}

impl<V: CredentialVerifier> AuthSession<V> {
    /// Create a new, signed-out auth session.
    #[must_use]
    pub fn new(
        users: UserStore,
        current: CurrentUser,
        storage: Arc<dyn KeyValueStorage>,
        verifier: V,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            users,
            current,
            storage,
            verifier,
            notifier,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current.get()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_authenticated()
    }

    /// Known accounts.
    #[must_use]
    pub const fn users(&self) -> &UserStore {
        &self.users
    }

    // =========================================================================
    // Session Persistence
    // =========================================================================

    /// Restore the session from durable storage.
    ///
    /// Call once at startup. A record that cannot be read or decoded is
    /// discarded and the session starts signed out. A restored account that
    /// the user store does not know yet (created by signup in an earlier
    /// process) is registered again. For an account the store already knows,
    /// the store's copy is restored and the other stored fields are ignored.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Option<User> {
        let stored: User = match storage::load_json(self.storage.as_ref(), keys::CURRENT_USER) {
            Ok(Some(user)) => user,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "discarding unreadable session record");
                self.forget();
                return None;
            }
        };

        // Known accounts come from the store, not the record.
        let user = if let Some(known) = self.users.get_by_id(&stored.id).cloned() {
            known
        } else {
            if let Err(e) = self.users.insert(stored.clone()) {
                warn!(error = %e, user_id = %stored.id, "discarding conflicting session record");
                self.forget();
                return None;
            }
            stored
        };

        info!(user_id = %user.id, "session restored");
        self.current.set(user.clone());
        Some(user)
    }

    fn persist(&self, user: &User) {
        if let Err(e) = storage::save_json(self.storage.as_ref(), keys::CURRENT_USER, user) {
            warn!(error = %e, user_id = %user.id, "failed to persist session");
        }
    }

    fn forget(&self) {
        if let Err(e) = self.storage.remove(keys::CURRENT_USER) {
            warn!(error = %e, "failed to remove session record");
        }
    }

    // =========================================================================
    // Login / Signup / Logout
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// The email match ignores case. On failure the current session is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// malformed, or the verifier rejects the password.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let candidate = Email::parse(email)
            .ok()
            .and_then(|email| self.users.get_by_email(email.as_str()))
            .cloned();

        if !self.verifier.verify(candidate.as_ref(), password).await {
            info!("login rejected");
            self.notifier.notify(Notification::destructive(
                "Login Failed",
                "Invalid email or password",
            ));
            return Err(AuthError::InvalidCredentials);
        }

        let user = candidate.ok_or(AuthError::InvalidCredentials)?;
        self.current.set(user.clone());
        self.persist(&user);

        info!(user_id = %user.id, "login succeeded");
        self.notifier.notify(Notification::info(
            "Login Successful",
            format!("Welcome back, {}!", user.name),
        ));
        Ok(user)
    }

    /// Create a non-admin account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidName` for a blank name,
    /// `AuthError::InvalidEmail` for a malformed email, and
    /// `AuthError::EmailInUse` if another account has the same email
    /// ignoring case.
    #[instrument(skip(self, name, password))]
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, AuthError> {
        let result = self.register(name, email, password).await;

        match &result {
            Ok(user) => {
                info!(user_id = %user.id, "account created");
                self.notifier.notify(Notification::info(
                    "Account Created",
                    "Your account was created successfully!",
                ));
            }
            Err(e) => {
                info!(error = %e, "signup rejected");
                self.notifier.notify(Notification::destructive(
                    "Signup Failed",
                    signup_failure_message(e),
                ));
            }
        }

        result
    }

    async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, AuthError> {
        self.verifier.round_trip().await;

        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::InvalidName);
        }
        let email = Email::parse(email)?;
        if self.users.email_in_use(&email) {
            return Err(AuthError::EmailInUse);
        }

        let user = User::new_member(name, email);
        self.verifier.enroll(&user, password);

        self.users.insert(user.clone()).map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::EmailInUse,
            RepositoryError::NotFound(_) => AuthError::InvalidCredentials,
        })?;

        self.current.set(user.clone());
        self.persist(&user);
        Ok(user)
    }

    /// Sign out and remove the durable session record.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(user) = self.current.get() {
            info!(user_id = %user.id, "logged out");
        }
        self.current.clear();
        self.forget();
        self.notifier.notify(Notification::info(
            "Logged Out",
            "You have been successfully logged out.",
        ));
    }
}

fn signup_failure_message(error: &AuthError) -> String {
    match error {
        AuthError::EmailInUse => "Email already in use".to_owned(),
        AuthError::InvalidEmail(_) => "Please enter a valid email address".to_owned(),
        AuthError::InvalidName => "Name is required".to_owned(),
        AuthError::InvalidCredentials => "Invalid email or password".to_owned(),
    }
}
