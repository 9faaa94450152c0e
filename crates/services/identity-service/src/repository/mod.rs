//! Repository layer for the account roster.

mod roster_repository;

pub use roster_repository::{InMemoryRoster, RosterRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use roster_repository::MockRosterRepository;
