//! Course repository with an in-memory implementation.

use parking_lot::RwLock;

use common::{AppError, AppResult};
use domain::{Course, Enrollment};

use super::seed::demo_catalog;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository trait for dependency injection.
///
/// Courses are never deleted; the collection only grows, and an existing
/// course only ever gains students.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CourseRepository: Send + Sync {
    /// All courses in creation order
    fn list(&self) -> Vec<Course>;

    /// Find course by ID
    fn find_by_id(&self, id: &str) -> Option<Course>;

    /// Append a course. Fails with a conflict if the id is taken.
    fn insert(&self, course: Course) -> AppResult<Course>;

    /// Add a student to a course, ignoring repeats
    fn add_student(&self, course_id: &str, user_id: &str) -> Enrollment;
}

/// Course collection kept in process memory, lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryCourseStore {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given courses, oldest first
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    /// Create a store pre-seeded with the demo catalog
    pub fn with_demo_catalog() -> Self {
        Self::with_courses(demo_catalog())
    }
}

impl CourseRepository for InMemoryCourseStore {
    fn list(&self) -> Vec<Course> {
        self.courses.read().clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Course> {
        self.courses
            .read()
            .iter()
            .find(|course| course.id == id)
            .cloned()
    }

    fn insert(&self, course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write();
        if courses.iter().any(|existing| existing.id == course.id) {
            return Err(AppError::conflict(format!("Course {}", course.id)));
        }
        courses.push(course.clone());
        Ok(course)
    }

    fn add_student(&self, course_id: &str, user_id: &str) -> Enrollment {
        let mut courses = self.courses.write();
        match courses.iter_mut().find(|course| course.id == course_id) {
            Some(course) => {
                if course.enroll(user_id) {
                    Enrollment::Enrolled
                } else {
                    Enrollment::AlreadyEnrolled
                }
            }
            None => Enrollment::UnknownCourse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{Level, NewCourse};

    fn course(id: &str) -> Course {
        Course::new(
            id.to_string(),
            NewCourse {
                title: "Spanish for Travelers".to_string(),
                description: "Everyday phrases".to_string(),
                instructor: "María García".to_string(),
                instructor_id: "2".to_string(),
                duration: "3 weeks".to_string(),
                level: Level::Beginner,
                category: "Languages".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_insert_appends_in_order() {
        let store = InMemoryCourseStore::with_demo_catalog();
        store.insert(course("x")).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "x"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let store = InMemoryCourseStore::with_demo_catalog();
        let result = store.insert(course("2"));

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.list().len(), 3);
        assert_eq!(store.find_by_id("2").unwrap().title, "Advanced UX/UI Design");
    }

    #[test]
    fn test_add_student_outcomes() {
        let store = InMemoryCourseStore::with_demo_catalog();

        assert_eq!(store.add_student("3", "1"), Enrollment::Enrolled);
        assert_eq!(store.add_student("3", "1"), Enrollment::AlreadyEnrolled);
        assert_eq!(store.add_student("missing", "1"), Enrollment::UnknownCourse);

        assert_eq!(store.find_by_id("3").unwrap().enrolled_students, vec!["1"]);
    }
}
