//! Versioned catalog snapshots handed to subscribers.

use std::sync::Arc;

use domain::{Course, CourseFilter};

/// Immutable view of the whole catalog at one point in time.
///
/// `version` starts at 0 for the initial catalog and increases by one on
/// every mutation that changes it.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub version: u64,
    pub courses: Arc<Vec<Course>>,
}

impl CatalogSnapshot {
    pub fn new(version: u64, courses: Vec<Course>) -> Self {
        Self {
            version,
            courses: Arc::new(courses),
        }
    }

    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Courses the user is enrolled in, in creation order
    pub fn enrolled_by(&self, user_id: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| course.is_enrolled(user_id))
            .cloned()
            .collect()
    }

    /// Courses the user created, in creation order
    pub fn created_by(&self, user_id: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| course.is_created_by(user_id))
            .cloned()
            .collect()
    }

    pub fn filter(&self, filter: &CourseFilter) -> Vec<Course> {
        filter.apply(&self.courses)
    }
}
