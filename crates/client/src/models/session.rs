//! Session-related types.
//!
//! The current-user slot is shared between the auth session, which writes
//! it, and the report session, which scopes queries by it.

use std::sync::{Arc, PoisonError, RwLock};

use super::user::User;

/// Shared handle to the current authenticated user, if any.
///
/// Cloning the handle shares the same slot.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser {
    inner: Arc<RwLock<Option<User>>>,
}

impl CurrentUser {
    /// Create an empty (logged out) slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current user.
    #[must_use]
    pub fn get(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn set(&self, user: User) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub(crate) fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Durable storage keys for session data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "civicstorm_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use civicstorm_core::Email;

    use super::*;

    #[test]
    fn test_clones_share_slot() {
        let handle = CurrentUser::new();
        let reader = handle.clone();
        assert!(!reader.is_authenticated());

        handle.set(User::new_member("Sam", Email::parse("sam@example.com").unwrap()));
        assert_eq!(reader.get().unwrap().name, "Sam");

        handle.clear();
        assert!(reader.get().is_none());
    }
}
