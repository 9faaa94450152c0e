//! Identity service - Mock authentication and the current session.
//!
//! Authentication outcomes are plain booleans. A failed login leaves the
//! session exactly as it was; registration always appends a fresh account
//! (unless unique emails are enforced) and signs it in.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use domain::{RosterEntry, User};

use crate::config::IdentityServiceConfig;
use crate::repository::RosterRepository;

/// Identity service trait for dependency injection.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Sign in with an exact email/password match.
    ///
    /// Resolves after the configured latency. On success the session is set
    /// to the account's public identity; on failure it is left untouched.
    async fn login(&self, email: &str, password: &str) -> bool;

    /// Create an account with a fresh id and sign it in.
    async fn register(&self, name: &str, email: &str, password: &str) -> bool;

    /// Clear the session. Idempotent.
    fn logout(&self);

    /// The signed-in user, if any
    fn current_user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Receive every change of the session pointer
    fn subscribe(&self) -> watch::Receiver<Option<User>>;
}

/// Concrete implementation of IdentityService over a roster repository.
pub struct SessionManager {
    roster: Arc<dyn RosterRepository>,
    session: watch::Sender<Option<User>>,
    auth_delay: Duration,
    enforce_unique_email: bool,
}

impl SessionManager {
    /// Create new identity service instance with no one signed in
    pub fn new(roster: Arc<dyn RosterRepository>, config: &IdentityServiceConfig) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            roster,
            session,
            auth_delay: config.auth_delay,
            enforce_unique_email: config.enforce_unique_email,
        }
    }

    async fn simulate_latency(&self) {
        if !self.auth_delay.is_zero() {
            tokio::time::sleep(self.auth_delay).await;
        }
    }

    fn set_session(&self, user: Option<User>) {
        self.session.send_replace(user);
    }
}

#[async_trait]
impl IdentityService for SessionManager {
    async fn login(&self, email: &str, password: &str) -> bool {
        self.simulate_latency().await;

        match self.roster.find_by_credentials(email, password) {
            Some(user) => {
                info!(user_id = %user.id, "User signed in");
                self.set_session(Some(user));
                true
            }
            None => {
                warn!(email = %email, "Sign-in rejected: invalid credentials");
                false
            }
        }
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        self.simulate_latency().await;

        let entry = RosterEntry::new(Uuid::new_v4().to_string(), name, email, password);
        let user = if self.enforce_unique_email {
            match self.roster.insert_if_email_free(entry) {
                Some(user) => user,
                None => {
                    warn!(email = %email, "Registration rejected: email already registered");
                    return false;
                }
            }
        } else {
            self.roster.insert(entry)
        };

        // The account is on the roster before the session can point at it
        info!(user_id = %user.id, "User registered and signed in");
        self.set_session(Some(user));
        true
    }

    fn logout(&self) {
        if let Some(user) = self.session.send_replace(None) {
            info!(user_id = %user.id, "User signed out");
        } else {
            debug!("Sign-out with no active session");
        }
    }

    fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.session.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockRosterRepository;
    use mockall::predicate::eq;

    fn config() -> IdentityServiceConfig {
        IdentityServiceConfig::default().without_delay()
    }

    fn juan() -> User {
        User::new("1", "Juan Pérez", "juan@email.com")
    }

    #[tokio::test]
    async fn test_login_sets_session_from_roster() {
        let mut roster = MockRosterRepository::new();
        roster
            .expect_find_by_credentials()
            .with(eq("juan@email.com"), eq("123456"))
            .times(1)
            .returning(|_, _| Some(juan()));

        let service = SessionManager::new(Arc::new(roster), &config());

        assert!(service.login("juan@email.com", "123456").await);
        assert_eq!(service.current_user(), Some(juan()));
        assert!(service.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let mut roster = MockRosterRepository::new();
        roster
            .expect_find_by_credentials()
            .with(eq("juan@email.com"), eq("123456"))
            .returning(|_, _| Some(juan()));
        roster
            .expect_find_by_credentials()
            .with(eq("juan@email.com"), eq("wrong"))
            .returning(|_, _| None);

        let service = SessionManager::new(Arc::new(roster), &config());
        assert!(service.login("juan@email.com", "123456").await);

        assert!(!service.login("juan@email.com", "wrong").await);
        assert_eq!(service.current_user(), Some(juan()));
    }

    #[tokio::test]
    async fn test_register_uses_unchecked_insert_by_default() {
        let mut roster = MockRosterRepository::new();
        roster.expect_insert_if_email_free().never();
        roster
            .expect_insert()
            .times(1)
            .returning(|entry| entry.identity());

        let service = SessionManager::new(Arc::new(roster), &config());

        assert!(service.register("Ana", "ana@email.com", "secret").await);
        let user = service.current_user().unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@email.com");
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[tokio::test]
    async fn test_register_with_taken_email_when_enforced() {
        let mut roster = MockRosterRepository::new();
        roster.expect_insert().never();
        roster
            .expect_insert_if_email_free()
            .times(1)
            .returning(|_| None);

        let mut config = config();
        config.enforce_unique_email = true;
        let service = SessionManager::new(Arc::new(roster), &config);

        assert!(!service.register("Juan", "juan@email.com", "pw").await);
        assert!(service.current_user().is_none());
    }

    #[tokio::test]
    async fn test_subscribe_observes_session_changes() {
        let mut roster = MockRosterRepository::new();
        roster
            .expect_find_by_credentials()
            .returning(|_, _| Some(juan()));

        let service = SessionManager::new(Arc::new(roster), &config());
        let mut session = service.subscribe();
        assert!(session.borrow().is_none());

        assert!(service.login("juan@email.com", "123456").await);
        assert!(session.has_changed().unwrap());
        assert_eq!(*session.borrow_and_update(), Some(juan()));

        service.logout();
        assert!(session.has_changed().unwrap());
        assert!(session.borrow_and_update().is_none());
    }
}
