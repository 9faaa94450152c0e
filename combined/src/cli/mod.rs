//! CLI module - Command-line interface for the catalog.
//!
//! Provides commands for:
//! - `courses` - Filtered catalog listing
//! - `dashboard` - Personal dashboard for one account
//! - `demo` - Scripted walkthrough

pub mod args;

pub use args::{Cli, Commands};
