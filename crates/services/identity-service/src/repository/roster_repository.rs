//! Account roster with an in-memory implementation.

use parking_lot::RwLock;

use domain::{RosterEntry, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Roster repository trait for dependency injection.
///
/// Lookups only ever return the public identity of an account.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait RosterRepository: Send + Sync {
    /// Find the account matching both email and password exactly
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User>;

    /// Append an account unconditionally
    fn insert(&self, entry: RosterEntry) -> User;

    /// Append an account unless its email is already taken.
    /// The check and the append happen under one write lock.
    fn insert_if_email_free(&self, entry: RosterEntry) -> Option<User>;

    /// List all accounts in registration order
    fn list(&self) -> Vec<User>;
}

/// Roster kept in process memory, lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    entries: RwLock<Vec<RosterEntry>>,
}

impl InMemoryRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster holding the given accounts
    pub fn with_entries(entries: Vec<RosterEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Create a roster pre-seeded with the two demo accounts
    pub fn with_demo_accounts() -> Self {
        Self::with_entries(vec![
            RosterEntry::new("1", "Juan Pérez", "juan@email.com", "123456"),
            RosterEntry::new("2", "María García", "maria@email.com", "123456"),
        ])
    }
}

impl RosterRepository for InMemoryRoster {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.matches(email, password))
            .map(User::from)
    }

    fn insert(&self, entry: RosterEntry) -> User {
        let user = entry.identity();
        self.entries.write().push(entry);
        user
    }

    fn insert_if_email_free(&self, entry: RosterEntry) -> Option<User> {
        let mut entries = self.entries.write();
        if entries.iter().any(|existing| existing.email == entry.email) {
            return None;
        }
        let user = entry.identity();
        entries.push(entry);
        Some(user)
    }

    fn list(&self) -> Vec<User> {
        self.entries.read().iter().map(User::from).collect()
    }
}
