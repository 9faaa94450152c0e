//! Common utilities shared across the catalog services.
//!
//! This crate provides:
//! - Unified error handling for the identity and catalog stores
//! - Shared configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
