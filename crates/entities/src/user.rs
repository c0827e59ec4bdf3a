//! User-related entity definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role-based access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// Regular user.
    #[default]
    User,
    /// Administrator.
    Admin,
    /// Owner of one or more stores.
    StoreOwner,
}

impl UserRole {
    /// Checks if this role has admin privileges.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Checks if this role is a store owner.
    pub fn is_store_owner(&self) -> bool {
        matches!(self, Self::StoreOwner)
    }

    /// Converts the role to a string for storage and sorting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::StoreOwner => "store-owner",
        }
    }

    /// Parses a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            "store-owner" => Some(Self::StoreOwner),
            _ => None,
        }
    }
}

/// A user in the system.
///
/// This is the public projection handed to views; the login credential
/// lives in [`UserRecord`] and never leaves the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: UserRole,
}

impl User {
    /// Creates a new user.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Opaque, already-hashed login credential.
///
/// The encoded form is produced and verified by the session crate;
/// nothing else inspects it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential(String);

impl Credential {
    /// Wraps an already-encoded credential.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the encoded form.
    pub fn encoded(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Full roster record: public user plus credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// The public user.
    pub user: User,
    /// The login credential.
    pub credential: Credential,
}

impl UserRecord {
    /// Creates a new roster record.
    pub fn new(user: User, credential: Credential) -> Self {
        Self { user, credential }
    }
}

/// Input for appending a user to the roster; the store mints the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// The already-hashed login credential.
    pub credential: Credential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::User, UserRole::Admin, UserRole::StoreOwner] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("manager"), None);
    }

    #[test]
    fn test_role_serde_uses_kebab_case() {
        let json = serde_json::to_string(&UserRole::StoreOwner).unwrap();
        assert_eq!(json, "\"store-owner\"");

        let role: UserRole = serde_json::from_str("\"store-owner\"").unwrap();
        assert_eq!(role, UserRole::StoreOwner);
    }

    #[test]
    fn test_user_serde_shape() {
        let user = User::new("1", "Admin User", "admin@example.com", UserRole::Admin);
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "name": "Admin User",
                "email": "admin@example.com",
                "role": "admin",
            })
        );
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::from_encoded("salt$digest");
        assert_eq!(format!("{credential:?}"), "Credential(..)");
    }
}
