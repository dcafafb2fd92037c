//! User store.

use civicstorm_core::{Email, UserId};

use super::{RepositoryError, fixtures};
use crate::models::User;

/// In-memory collection of known users.
///
/// Emails are unique ignoring ASCII case.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Create a store holding the fixture accounts.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            users: fixtures::users(),
        }
    }

    /// Look up a user by email, ignoring case.
    #[must_use]
    pub fn get_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email.eq_ignore_case(email))
    }

    #[must_use]
    pub fn get_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Whether any user already has this email.
    #[must_use]
    pub fn email_in_use(&self, email: &Email) -> bool {
        self.get_by_email(email.as_str()).is_some()
    }

    /// Add a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email or ID is taken.
    pub fn insert(&mut self, user: User) -> Result<(), RepositoryError> {
        if self.email_in_use(&user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                user.email
            )));
        }
        if self.get_by_id(&user.id).is_some() {
            return Err(RepositoryError::Conflict(format!("user id {} exists", user.id)));
        }
        self.users.push(user);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let store = UserStore::seeded();
        let user = store.get_by_email("ADMIN@CivicStorm.com").unwrap();
        assert!(user.is_admin);
        assert!(store.get_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let mut store = UserStore::seeded();
        let dup = User::new_member("Jane Again", Email::parse("Jane.Smith@example.com").unwrap());
        assert!(matches!(store.insert(dup), Err(RepositoryError::Conflict(_))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_new_user() {
        let mut store = UserStore::new();
        assert!(store.is_empty());
        let user = User::new_member("Sam", Email::parse("sam@example.com").unwrap());
        let id = user.id.clone();
        store.insert(user).unwrap();
        assert_eq!(store.get_by_id(&id).unwrap().name, "Sam");
    }
}
