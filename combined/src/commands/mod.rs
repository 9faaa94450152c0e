//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod courses;
pub mod dashboard;
pub mod demo;
