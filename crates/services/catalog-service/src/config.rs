//! Catalog service configuration.

use common::env_flag;

/// Catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogServiceConfig {
    /// Pre-seed the demo courses
    pub seed_catalog: bool,
    /// Validate new courses and reject enrollment in unknown courses
    pub strict_validation: bool,
}

impl CatalogServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_catalog: env_flag("CATALOG_SEED_DEMO", true),
            strict_validation: env_flag("CATALOG_STRICT_VALIDATION", false),
        }
    }

    /// Same configuration with the strict policy switched on.
    pub fn strict(mut self) -> Self {
        self.strict_validation = true;
        self
    }
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self {
            seed_catalog: true,
            strict_validation: false,
        }
    }
}
