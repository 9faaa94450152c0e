//! Service Container - Holds the identity and catalog stores for one process.
//!
//! Both stores are created once at startup and shared through `Arc`; the
//! presentation layer only ever sees the service traits.

use std::sync::Arc;

use catalog_service_lib::config::CatalogServiceConfig;
use catalog_service_lib::service::CatalogService;
use identity_service_lib::config::IdentityServiceConfig;
use identity_service_lib::service::IdentityService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get identity service
    fn identity(&self) -> Arc<dyn IdentityService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    identity_service: Arc<dyn IdentityService>,
    catalog_service: Arc<dyn CatalogService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        identity_service: Arc<dyn IdentityService>,
        catalog_service: Arc<dyn CatalogService>,
    ) -> Self {
        Self {
            identity_service,
            catalog_service,
        }
    }

    /// Build both stores from explicit configuration
    pub fn from_config(identity: &IdentityServiceConfig, catalog: &CatalogServiceConfig) -> Self {
        Self::new(
            Arc::new(identity_service_lib::build(identity)),
            Arc::new(catalog_service_lib::build(catalog)),
        )
    }

    /// Build both stores from environment variables
    pub fn from_env() -> Self {
        Self::from_config(
            &IdentityServiceConfig::from_env(),
            &CatalogServiceConfig::from_env(),
        )
    }
}

impl ServiceContainer for Services {
    fn identity(&self) -> Arc<dyn IdentityService> {
        self.identity_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }
}
