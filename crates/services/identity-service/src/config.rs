//! Identity service configuration.

use std::env;
use std::time::Duration;

use common::env_flag;
use domain::DEFAULT_AUTH_DELAY_MS;

/// Identity service configuration.
#[derive(Debug, Clone)]
pub struct IdentityServiceConfig {
    /// Artificial latency applied to login and registration
    pub auth_delay: Duration,
    /// Reject registration with an email already on the roster
    pub enforce_unique_email: bool,
    /// Pre-seed the demo accounts
    pub seed_roster: bool,
}

impl IdentityServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            auth_delay: Duration::from_millis(
                env::var("IDENTITY_AUTH_DELAY_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(DEFAULT_AUTH_DELAY_MS),
            ),
            enforce_unique_email: env_flag("IDENTITY_ENFORCE_UNIQUE_EMAIL", false),
            seed_roster: env_flag("IDENTITY_SEED_ROSTER", true),
        }
    }

    /// Same configuration without the artificial latency.
    pub fn without_delay(mut self) -> Self {
        self.auth_delay = Duration::ZERO;
        self
    }
}

impl Default for IdentityServiceConfig {
    fn default() -> Self {
        Self {
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            enforce_unique_email: false,
            seed_roster: true,
        }
    }
}
