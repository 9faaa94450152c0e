//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base configuration shared by every binary in the workspace.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Default log filter, used when RUST_LOG is not set
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var("COURSEHUB_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: env::var("COURSEHUB_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "coursehub".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Read a boolean flag from the environment.
///
/// Accepts `1/0`, `true/false`, `yes/no` and `on/off` (case-insensitive);
/// anything else, or an unset variable, yields `default`.
pub fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_env_flag_falls_back_to_default() {
        assert!(env_flag("COURSEHUB_TEST_FLAG_THAT_IS_NEVER_SET", true));
        assert!(!env_flag("COURSEHUB_TEST_FLAG_THAT_IS_NEVER_SET", false));
    }
}
