//! Catalog Service Library
//!
//! Owns the canonical, creation-ordered course collection and derives
//! every view (all, enrolled-by, created-by, search, filter) from it on
//! read. Mutations publish a fresh catalog snapshot to subscribers.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::CatalogServiceConfig;
use crate::repository::{CourseRepository, InMemoryCourseStore};
use crate::service::CatalogManager;

/// Build the catalog store from configuration.
pub fn build(config: &CatalogServiceConfig) -> CatalogManager {
    let store = if config.seed_catalog {
        InMemoryCourseStore::with_demo_catalog()
    } else {
        InMemoryCourseStore::new()
    };
    info!(
        courses = store.list().len(),
        strict = config.strict_validation,
        "Course catalog ready"
    );

    CatalogManager::new(Arc::new(store), config)
}
