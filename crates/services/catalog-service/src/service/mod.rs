//! Catalog service business logic.

mod catalog_service;
mod snapshot;

pub use catalog_service::{CatalogManager, CatalogService};
pub use snapshot::CatalogSnapshot;
