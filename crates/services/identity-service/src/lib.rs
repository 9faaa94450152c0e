//! Identity Service Library
//!
//! Holds the mock account roster and the zero-or-one current session.
//! The presentation layer creates one instance at startup and keeps it
//! for the lifetime of the process.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::IdentityServiceConfig;
use crate::repository::{InMemoryRoster, RosterRepository};
use crate::service::SessionManager;

/// Build the identity store from configuration.
pub fn build(config: &IdentityServiceConfig) -> SessionManager {
    let roster = if config.seed_roster {
        InMemoryRoster::with_demo_accounts()
    } else {
        InMemoryRoster::new()
    };
    info!(
        accounts = roster.list().len(),
        auth_delay = ?config.auth_delay,
        "Identity store ready"
    );

    SessionManager::new(Arc::new(roster), config)
}
