//! Session-aware facade over the identity and catalog stores.
//!
//! Operations that act "as me" read the current session first and fail
//! with `Unauthorized` when nobody is signed in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{AppError, AppResult};
use domain::{Course, CourseFilter, Enrollment, Level, NewCourse, User};

use super::container::ServiceContainer;

/// Course form input. Instructor name and id come from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: Level,
    pub category: String,
}

impl CourseDraft {
    fn into_new_course(self, instructor: &User) -> NewCourse {
        NewCourse {
            title: self.title,
            description: self.description,
            instructor: instructor.name.clone(),
            instructor_id: instructor.id.clone(),
            duration: self.duration,
            level: self.level,
            category: self.category,
        }
    }
}

/// The three course lists of the dashboard, taken from one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub user: Option<User>,
    pub filtered: Vec<Course>,
    pub enrolled: Vec<Course>,
    pub created: Vec<Course>,
}

impl DashboardView {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    pub fn created_count(&self) -> usize {
        self.created.len()
    }
}

pub struct CourseHub {
    services: Arc<dyn ServiceContainer>,
}

impl CourseHub {
    pub fn new(services: Arc<dyn ServiceContainer>) -> Self {
        Self { services }
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.services.identity().login(email, password).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        self.services.identity().register(name, email, password).await
    }

    pub fn logout(&self) {
        self.services.identity().logout();
    }

    pub fn current_user(&self) -> Option<User> {
        self.services.identity().current_user()
    }

    fn require_user(&self) -> AppResult<User> {
        self.current_user().ok_or(AppError::Unauthorized)
    }

    /// Enroll the signed-in user in a course
    pub fn enroll_current_user(&self, course_id: &str) -> AppResult<Enrollment> {
        let user = self.require_user()?;
        self.services.catalog().enroll_in_course(course_id, &user.id)
    }

    /// Create a course taught by the signed-in user
    pub fn create_course_as_current_user(&self, draft: CourseDraft) -> AppResult<Course> {
        let user = self.require_user()?;
        self.services
            .catalog()
            .create_course(draft.into_new_course(&user))
    }

    /// Filtered catalog plus the current user's enrolled and created courses.
    ///
    /// Without a session the personal lists are empty.
    pub fn dashboard(&self, filter: &CourseFilter) -> DashboardView {
        let snapshot = self.services.catalog().snapshot();
        let user = self.current_user();

        let (enrolled, created) = match &user {
            Some(user) => (snapshot.enrolled_by(&user.id), snapshot.created_by(&user.id)),
            None => (Vec::new(), Vec::new()),
        };
        let filtered = snapshot.filter(filter);
        debug!(
            version = snapshot.version,
            filtered = filtered.len(),
            "Dashboard computed"
        );

        DashboardView {
            user,
            filtered,
            enrolled,
            created,
        }
    }
}
