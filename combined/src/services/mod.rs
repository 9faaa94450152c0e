//! Services module - Store wiring and the session-aware facade.

pub mod container;
pub mod hub;

pub use container::{ServiceContainer, Services};
pub use hub::{CourseDraft, CourseHub, DashboardView};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
