//! Domain layer - Course catalog entities and pure query logic.
//!
//! This crate contains the catalog and identity types shared by the
//! services, plus the stateless filter pipeline. No I/O, no clocks
//! beyond course creation timestamps, no shared mutable state.

pub mod constants;
pub mod course;
pub mod error;
pub mod filter;
pub mod user;

pub use constants::*;
pub use course::{Course, Enrollment, Level, NewCourse};
pub use error::DomainError;
pub use filter::{CourseFilter, Facet};
pub use user::{RosterEntry, User};
