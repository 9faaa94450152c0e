//! User identity and roster entries.

use serde::{Deserialize, Serialize};

/// Public identity of an account, safe to hand to the presentation layer.
///
/// This is what the session holds; the password never leaves the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Account on the mock roster.
///
/// Credentials are compared by plain equality; there is no hashing
/// because there is no real password handling in this system.
#[derive(Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    /// Login key, matched case-sensitively
    pub email: String,
    password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for RosterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl RosterEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both email and password.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Public identity of this account (id, name, email).
    pub fn identity(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl From<&RosterEntry> for User {
    fn from(entry: &RosterEntry) -> Self {
        entry.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn juan() -> RosterEntry {
        RosterEntry::new("1", "Juan Pérez", "juan@email.com", "123456")
    }

    #[test]
    fn test_matches_requires_both_fields() {
        let entry = juan();
        assert!(entry.matches("juan@email.com", "123456"));
        assert!(!entry.matches("juan@email.com", "wrong"));
        assert!(!entry.matches("maria@email.com", "123456"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        assert!(!juan().matches("JUAN@email.com", "123456"));
    }

    #[test]
    fn test_identity_drops_password() {
        let user = juan().identity();
        assert_eq!(user, User::new("1", "Juan Pérez", "juan@email.com"));

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("123456"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", juan());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("123456"));
    }
}
