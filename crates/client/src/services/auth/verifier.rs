//! Credential verification port.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use civicstorm_core::UserId;

use crate::models::User;

/// Checks and registers passwords.
///
/// Login awaits one [`verify`](Self::verify) and signup one
/// [`round_trip`](Self::round_trip); neither is cancelled or retried, and
/// both are paid whether the operation succeeds or fails.
pub trait CredentialVerifier: Send + Sync {
    /// One simulated backend round trip.
    fn round_trip(&self) -> impl Future<Output = ()> + Send;

    /// Check `password` for `user`, including one round trip. `user` is
    /// `None` when no account matched the email.
    fn verify(
        &self,
        user: Option<&User>,
        password: &SecretString,
    ) -> impl Future<Output = bool> + Send;

    /// Register the password of a newly created account.
    fn enroll(&self, user: &User, password: &SecretString);
}

/// Demo verifier: every seeded account shares one password, accounts created
/// at signup use the password they enrolled with.
///
/// Plaintext comparison only. Not an authentication scheme.
pub struct DemoPasswordVerifier {
    shared_password: SecretString,
    enrolled: Mutex<HashMap<UserId, SecretString>>,
    latency: Duration,
}

impl DemoPasswordVerifier {
    /// Default simulated round trip.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

    #[must_use]
    pub fn new(shared_password: SecretString, latency: Duration) -> Self {
        Self {
            shared_password,
            enrolled: Mutex::new(HashMap::new()),
            latency,
        }
    }

    fn expected_for(&self, user: &User) -> SecretString {
        self.enrolled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user.id)
            .cloned()
            .unwrap_or_else(|| self.shared_password.clone())
    }
}

impl std::fmt::Debug for DemoPasswordVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoPasswordVerifier")
            .field("shared_password", &"[REDACTED]")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier for DemoPasswordVerifier {
    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn verify(&self, user: Option<&User>, password: &SecretString) -> bool {
        self.round_trip().await;
        user.is_some_and(|user| {
            self.expected_for(user).expose_secret() == password.expose_secret()
        })
    }

    fn enroll(&self, user: &User, password: &SecretString) {
        self.enrolled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id.clone(), password.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use civicstorm_core::Email;

    use super::*;
    use crate::db::fixtures;

    fn verifier() -> DemoPasswordVerifier {
        DemoPasswordVerifier::new(SecretString::from("password"), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_seeded_users_share_password() {
        let v = verifier();
        let jane = fixtures::users().remove(0);
        assert!(v.verify(Some(&jane), &SecretString::from("password")).await);
        assert!(!v.verify(Some(&jane), &SecretString::from("hunter2")).await);
    }

    #[tokio::test]
    async fn test_unknown_user_never_verifies() {
        let v = verifier();
        assert!(!v.verify(None, &SecretString::from("password")).await);
    }

    #[tokio::test]
    async fn test_enrolled_password_replaces_shared() {
        let v = verifier();
        let sam = User::new_member("Sam", Email::parse("sam@example.com").unwrap());
        v.enroll(&sam, &SecretString::from("s3cret"));
        assert!(v.verify(Some(&sam), &SecretString::from("s3cret")).await);
        assert!(!v.verify(Some(&sam), &SecretString::from("password")).await);
    }

    #[tokio::test]
    async fn test_latency_is_awaited() {
        let v = DemoPasswordVerifier::new(SecretString::from("password"), Duration::from_millis(20));
        let started = std::time::Instant::now();
        let _ = v.verify(None, &SecretString::from("x")).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", verifier());
        assert!(!debug.contains("password\""));
        assert!(debug.contains("[REDACTED]"));
    }
}
