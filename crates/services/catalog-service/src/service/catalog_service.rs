//! Catalog service - Course creation, enrollment and derived views.
//!
//! The repository holds the only copy of the course collection. Every
//! view is recomputed from it on read, and every mutation that changes it
//! publishes a new [`CatalogSnapshot`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{is_known_category, Course, CourseFilter, DomainError, Enrollment, NewCourse};

use super::snapshot::CatalogSnapshot;
use crate::config::CatalogServiceConfig;
use crate::repository::CourseRepository;

/// Catalog service trait for dependency injection.
///
/// Missing courses are reported as `None` or as a no-op enrollment, never
/// as an error, unless the strict policy is enabled.
pub trait CatalogService: Send + Sync {
    /// Create a course with a fresh id, no students and the current time
    fn create_course(&self, input: NewCourse) -> AppResult<Course>;

    /// Enroll a user in a course. Repeats and unknown courses are no-ops.
    fn enroll_in_course(&self, course_id: &str, user_id: &str) -> AppResult<Enrollment>;

    /// Every course, oldest first
    fn all_courses(&self) -> Vec<Course>;

    /// Courses the user is enrolled in, in catalog order
    fn enrolled_courses(&self, user_id: &str) -> Vec<Course>;

    /// Courses whose instructor is the user, in catalog order
    fn created_courses(&self, user_id: &str) -> Vec<Course>;

    fn get_course_by_id(&self, id: &str) -> Option<Course>;

    /// Case-insensitive search over title, description and instructor
    fn search_courses(&self, query: &str) -> Vec<Course>;

    /// Exact category match
    fn filter_courses_by_category(&self, category: &str) -> Vec<Course>;

    /// Run the full filter pipeline over the current catalog
    fn filter_courses(&self, filter: &CourseFilter) -> Vec<Course>;

    /// The latest published snapshot
    fn snapshot(&self) -> CatalogSnapshot;

    /// Receive a snapshot after every change to the catalog
    fn subscribe(&self) -> watch::Receiver<CatalogSnapshot>;
}

/// Concrete implementation of CatalogService using repository.
pub struct CatalogManager {
    repo: Arc<dyn CourseRepository>,
    snapshots: watch::Sender<CatalogSnapshot>,
    strict: bool,
}

impl CatalogManager {
    /// Create new catalog service instance with repository
    pub fn new(repo: Arc<dyn CourseRepository>, config: &CatalogServiceConfig) -> Self {
        let (snapshots, _) = watch::channel(CatalogSnapshot::new(0, repo.list()));
        Self {
            repo,
            snapshots,
            strict: config.strict_validation,
        }
    }

    fn check_strict(&self, input: &NewCourse) -> AppResult<()> {
        input.validate().map_err(DomainError::from)?;
        if !is_known_category(&input.category) {
            return Err(AppError::validation(format!(
                "Unknown category: {}",
                input.category
            )));
        }
        Ok(())
    }

    fn publish(&self) {
        // Reading inside the closure keeps versions and contents in step
        self.snapshots.send_modify(|snapshot| {
            snapshot.version += 1;
            snapshot.courses = Arc::new(self.repo.list());
        });
    }
}

impl CatalogService for CatalogManager {
    fn create_course(&self, input: NewCourse) -> AppResult<Course> {
        if self.strict {
            self.check_strict(&input)?;
        }

        let course = Course::new(Uuid::new_v4().to_string(), input, Utc::now());
        let course = self.repo.insert(course)?;
        self.publish();

        info!(
            course_id = %course.id,
            instructor_id = %course.instructor_id,
            "Course created"
        );
        Ok(course)
    }

    fn enroll_in_course(&self, course_id: &str, user_id: &str) -> AppResult<Enrollment> {
        let outcome = self.repo.add_student(course_id, user_id);
        match outcome {
            Enrollment::Enrolled => {
                self.publish();
                debug!(course_id = %course_id, user_id = %user_id, "Student enrolled");
            }
            Enrollment::AlreadyEnrolled => {
                debug!(course_id = %course_id, user_id = %user_id, "Already enrolled");
            }
            Enrollment::UnknownCourse if self.strict => {
                warn!(course_id = %course_id, "Enrollment rejected: unknown course");
                return Err(AppError::NotFound);
            }
            Enrollment::UnknownCourse => {
                warn!(course_id = %course_id, "Enrollment ignored: unknown course");
            }
        }
        Ok(outcome)
    }

    fn all_courses(&self) -> Vec<Course> {
        self.repo.list()
    }

    fn enrolled_courses(&self, user_id: &str) -> Vec<Course> {
        self.repo
            .list()
            .into_iter()
            .filter(|course| course.is_enrolled(user_id))
            .collect()
    }

    fn created_courses(&self, user_id: &str) -> Vec<Course> {
        self.repo
            .list()
            .into_iter()
            .filter(|course| course.is_created_by(user_id))
            .collect()
    }

    fn get_course_by_id(&self, id: &str) -> Option<Course> {
        let course = self.repo.find_by_id(id);
        if course.is_none() {
            debug!(course_id = %id, "Course lookup missed");
        }
        course
    }

    fn search_courses(&self, query: &str) -> Vec<Course> {
        CourseFilter::default()
            .with_query(query)
            .apply(&self.repo.list())
    }

    fn filter_courses_by_category(&self, category: &str) -> Vec<Course> {
        CourseFilter::default()
            .with_category(category)
            .apply(&self.repo.list())
    }

    fn filter_courses(&self, filter: &CourseFilter) -> Vec<Course> {
        filter.apply(&self.repo.list())
    }

    fn snapshot(&self) -> CatalogSnapshot {
        self.snapshots.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.snapshots.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCourseRepository;
    use domain::Level;
    use mockall::predicate::eq;

    fn new_course(category: &str) -> NewCourse {
        NewCourse {
            title: "Intro to X".to_string(),
            description: "Everything about X".to_string(),
            instructor: "Juan Pérez".to_string(),
            instructor_id: "1".to_string(),
            duration: "4 weeks".to_string(),
            level: Level::Beginner,
            category: category.to_string(),
        }
    }

    fn empty_repo() -> MockCourseRepository {
        let mut repo = MockCourseRepository::new();
        repo.expect_list().returning(Vec::new);
        repo
    }

    #[test]
    fn test_create_course_assigns_id_and_publishes() {
        let mut repo = empty_repo();
        repo.expect_insert().times(1).returning(Ok);

        let service = CatalogManager::new(Arc::new(repo), &CatalogServiceConfig::default());
        let course = service.create_course(new_course("Programming")).unwrap();

        assert!(Uuid::parse_str(&course.id).is_ok());
        assert!(course.enrolled_students.is_empty());
        assert_eq!(service.snapshot().version, 1);
    }

    #[test]
    fn test_insert_conflict_is_propagated_without_publishing() {
        let mut repo = empty_repo();
        repo.expect_insert()
            .returning(|course| Err(AppError::conflict(format!("Course {}", course.id))));

        let service = CatalogManager::new(Arc::new(repo), &CatalogServiceConfig::default());
        let result = service.create_course(new_course("Programming"));

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(service.snapshot().version, 0);
    }

    #[test]
    fn test_permissive_create_accepts_empty_fields() {
        let mut repo = empty_repo();
        repo.expect_insert().times(1).returning(Ok);

        let service = CatalogManager::new(Arc::new(repo), &CatalogServiceConfig::default());
        let mut input = new_course("Cooking");
        input.title = String::new();

        let course = service.create_course(input).unwrap();
        assert_eq!(course.title, "");
        assert_eq!(course.category, "Cooking");
    }

    #[test]
    fn test_strict_create_rejects_before_touching_repository() {
        let mut repo = empty_repo();
        repo.expect_insert().never();

        let config = CatalogServiceConfig::default().strict();
        let service = CatalogManager::new(Arc::new(repo), &config);

        let mut empty_title = new_course("Programming");
        empty_title.title = String::new();
        assert_eq!(
            service.create_course(empty_title),
            Err(AppError::validation("Title cannot be empty"))
        );
        assert_eq!(
            service.create_course(new_course("Cooking")),
            Err(AppError::validation("Unknown category: Cooking"))
        );
    }

    #[test]
    fn test_no_op_enrollment_does_not_publish() {
        let mut repo = empty_repo();
        repo.expect_add_student()
            .with(eq("1"), eq("2"))
            .returning(|_, _| Enrollment::AlreadyEnrolled);
        repo.expect_add_student()
            .with(eq("missing"), eq("2"))
            .returning(|_, _| Enrollment::UnknownCourse);

        let service = CatalogManager::new(Arc::new(repo), &CatalogServiceConfig::default());
        let updates = service.subscribe();

        assert_eq!(
            service.enroll_in_course("1", "2"),
            Ok(Enrollment::AlreadyEnrolled)
        );
        assert_eq!(
            service.enroll_in_course("missing", "2"),
            Ok(Enrollment::UnknownCourse)
        );
        assert!(!updates.has_changed().unwrap());
    }

    #[test]
    fn test_strict_enrollment_in_unknown_course() {
        let mut repo = empty_repo();
        repo.expect_add_student()
            .returning(|_, _| Enrollment::UnknownCourse);

        let config = CatalogServiceConfig::default().strict();
        let service = CatalogManager::new(Arc::new(repo), &config);

        assert_eq!(
            service.enroll_in_course("missing", "1"),
            Err(AppError::NotFound)
        );
    }
}
