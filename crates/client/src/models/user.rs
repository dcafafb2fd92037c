//! User domain types.

use serde::{Deserialize, Serialize};

use civicstorm_core::{Email, UserId};

/// A registered user.
///
/// Users are immutable once created. The serialized form is what gets written
/// to durable storage for the session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique, case-insensitive).
    pub email: Email,
    /// Whether the user can triage every report.
    pub is_admin: bool,
}

impl User {
    /// Create a new non-admin user with a freshly generated ID.
    #[must_use]
    pub fn new_member(name: impl Into<String>, email: Email) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email,
            is_admin: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_is_not_admin() {
        let user = User::new_member("Sam", Email::parse("sam@example.com").unwrap());
        assert!(!user.is_admin);
        assert!(user.id.as_str().starts_with("user-"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let user = User {
            id: UserId::new("user-2"),
            name: "Admin User".to_owned(),
            email: Email::parse("admin@civicstorm.com").unwrap(),
            is_admin: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "user-2",
                "name": "Admin User",
                "email": "admin@civicstorm.com",
                "isAdmin": true
            })
        );

        let parsed: User = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, user);
    }
}
