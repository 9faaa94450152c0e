//! Repository layer for course data.

mod course_repository;
mod seed;

pub use course_repository::{CourseRepository, InMemoryCourseStore};
pub use seed::demo_catalog;

#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
