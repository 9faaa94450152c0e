//! CourseHub - Presentation adapter over the catalog and identity stores.
//!
//! Wires both stores into a [`services::Services`] container, exposes the
//! session-aware [`services::CourseHub`] facade and the `coursehub` CLI.

pub mod cli;
pub mod commands;
pub mod output;
pub mod services;
